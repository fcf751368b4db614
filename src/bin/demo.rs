//! Demonstration driver: a thin consumer of the allocator API.

use pagealloc::PageAllocator;
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")))
    .init();

  let mut heap = PageAllocator::new().expect("arena mapping failed");

  let a1 = heap.allocate(12).expect("allocate a1");
  heap.block_mut(a1, 4).copy_from_slice(&9999i32.to_ne_bytes());
  let mut b1 = heap.allocate(5).expect("allocate b1");
  heap.block_mut(b1, 4).copy_from_slice(&99199i32.to_ne_bytes());
  let a2 = heap.allocate(12).expect("allocate a2");
  heap.block_mut(a2, 4).copy_from_slice(&99i32.to_ne_bytes());
  let b2 = heap.allocate(5).expect("allocate b2");
  heap.block_mut(b2, 4).copy_from_slice(&199i32.to_ne_bytes());

  b1 = heap.reallocate(Some(b1), 32).expect("grow b1");
  let mut word = [0u8; 4];
  word.copy_from_slice(heap.block(b1, 4));
  println!("b1 moved to offset {} and still holds {}", b1.offset(), i32::from_ne_bytes(word));

  println!("{}", heap.dump());

  heap.free(a1).expect("free a1");
  println!("{}", heap.dump());
}
