use std::{sync::Arc, thread};

use parking_lot::{Mutex, RwLock};
use sklite::SkipList;

const THREADS: u64 = 4;
const PER_THREAD: u64 = 250;

#[test]
fn mutex_serializes_writers() {
  let list = Arc::new(Mutex::new(SkipList::new()));

  let handles: Vec<_> = (0..THREADS)
    .map(|t| {
      let list = list.clone();
      thread::spawn(move || {
        for i in 0..PER_THREAD {
          list.lock().insert(t * PER_THREAD + i, t);
        }
      })
    })
    .collect();
  for h in handles {
    h.join().unwrap();
  }

  let list = list.lock();
  assert_eq!(list.len() as u64, THREADS * PER_THREAD);
  let keys: Vec<u64> = list.keys(0).unwrap().copied().collect();
  assert_eq!(keys, (0..THREADS * PER_THREAD).collect::<Vec<_>>());
  for t in 0..THREADS {
    assert_eq!(list.get(&(t * PER_THREAD)), Some(&t));
  }
}

#[test]
fn rwlock_readers_see_complete_writes() {
  let list = Arc::new(RwLock::new(SkipList::with_seed(3)));
  {
    let mut w = list.write();
    for i in 0..1000u64 {
      w.insert(i, i * 2);
    }
  }

  let writer = {
    let list = list.clone();
    thread::spawn(move || {
      for i in (0..1000u64).step_by(2) {
        list.write().remove(&i);
      }
    })
  };

  let readers: Vec<_> = (0..THREADS)
    .map(|_| {
      let list = list.clone();
      thread::spawn(move || {
        for _ in 0..50 {
          let r = list.read();
          let keys: Vec<u64> = r.keys(0).unwrap().copied().collect();
          assert_eq!(keys.len(), r.len());
          assert!(keys.windows(2).all(|w| w[0] < w[1]));
          // odd keys are never removed
          assert_eq!(r.get(&999), Some(&1998));
        }
      })
    })
    .collect();

  writer.join().unwrap();
  for r in readers {
    r.join().unwrap();
  }

  let r = list.read();
  assert_eq!(r.len(), 500);
  assert!(r.iter().all(|(k, v)| k % 2 == 1 && *v == k * 2));
}
