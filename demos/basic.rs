//! Basic usage examples for `BitVector`

use rt_bitvector::BitVector;

fn main() {
    println!("=== BitVector Basic Usage ===\n");

    // A fixed vector tracking 40 registers
    let mut regs = BitVector::fixed(40);
    println!("Created fixed vector");
    println!("Capacity: {} bits ({} words)\n", regs.capacity(), regs.word_count());

    // Hand out registers first-fit
    let r0 = regs.allocate_first_clear_bit();
    let r1 = regs.allocate_first_clear_bit();
    let r2 = regs.allocate_first_clear_bit();
    println!("Allocated registers: {r0:?} {r1:?} {r2:?}");

    regs.clear_bit(1);
    println!("Released register 1");
    println!("Next allocation: {:?}\n", regs.allocate_first_clear_bit());

    // Fill it up; a fixed vector refuses to grow
    regs.set_initial_bits(regs.capacity());
    println!("Filled all {} bits", regs.count_set_bits());
    println!("Allocation on a full fixed vector: {:?}\n", regs.allocate_first_clear_bit());

    // A growable vector grows on demand
    let mut visited = BitVector::growable(16);
    for node in [2, 5, 9] {
        visited.set_bit(node);
    }
    println!("Visited nodes: {visited:?}, capacity {}", visited.capacity());
    visited.set_bit(40);
    println!("After visiting 40: {visited:?}, capacity {}\n", visited.capacity());

    // Aggregate operations
    let other: BitVector = [5, 9, 77].into_iter().collect();
    let mut both = BitVector::growable(0);
    both.intersect(&visited, &other).expect("growable destination");
    println!("Intersection with {other:?}: {both:?}");

    let mut either = BitVector::fixed(32);
    match either.unify(&visited, &other) {
        Ok(()) => println!("Union: {either:?}"),
        Err(err) => println!("Union into a 32-bit fixed vector failed: {err}"),
    }

    let changed = visited.merge_checked(&other).expect("growable destination");
    println!("Merged {other:?} into visited, changed: {changed}");
    let changed = visited.merge_checked(&other).expect("growable destination");
    println!("Merged again, changed: {changed}");
    println!("Visited differs from other? {}\n", visited.differs(&other));

    // Iterate over set bits
    print!("Set bits: ");
    for bit in &visited {
        print!("{bit} ");
    }
    println!();
    println!("As binary: {visited:#b}");
}
