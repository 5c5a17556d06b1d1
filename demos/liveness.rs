//! Backward liveness analysis over a small control-flow graph.
//!
//! Run with `cargo run --example liveness --features tracing` to see the
//! growth events of the per-block vectors.

use rt_bitvector::BitVector;
use tracing_subscriber::filter::LevelFilter;

struct Block {
    name: &'static str,
    succs: &'static [usize],
    uses: &'static [usize],
    defs: &'static [usize],
}

// v0 = ..; v1 = ..
// loop: v2 = v0 + v1; v0 = v2; if .. goto loop
// exit: return v2
const CFG: &[Block] = &[
    Block {
        name: "entry",
        succs: &[1],
        uses: &[],
        defs: &[0, 1],
    },
    Block {
        name: "loop",
        succs: &[1, 2],
        uses: &[0, 1],
        defs: &[2, 0],
    },
    Block {
        name: "exit",
        succs: &[],
        uses: &[2],
        defs: &[],
    },
];

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_target(false)
        .init();

    // Start empty and let the vectors grow as variables show up
    let mut live_in: Vec<BitVector> = CFG.iter().map(|_| BitVector::growable(0)).collect();
    let mut live_out: Vec<BitVector> = CFG.iter().map(|_| BitVector::growable(0)).collect();

    let mut round = 0;
    loop {
        round += 1;
        let mut changed = false;

        for (i, block) in CFG.iter().enumerate().rev() {
            for &s in block.succs {
                live_out[i]
                    .merge_checked(&live_in[s])
                    .expect("growable destination");
            }

            let mut transfer = live_out[i].clone();
            for &d in block.defs {
                if d < transfer.capacity() {
                    transfer.clear_bit(d);
                }
            }
            transfer.extend(block.uses.iter().copied());

            changed |= live_in[i]
                .merge_checked(&transfer)
                .expect("growable destination");
        }

        println!("round {round}: changed = {changed}");
        if !changed {
            break;
        }
    }

    for (i, block) in CFG.iter().enumerate() {
        println!(
            "{:>5}: in = {:?}, out = {:?}",
            block.name, live_in[i], live_out[i]
        );
    }
}
