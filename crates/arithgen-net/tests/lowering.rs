//! Every network kind must compute the same functions for the same
//! construction sequence, whatever it lowers each primitive to.

use arithgen_net::{GateNetwork, Network, NetworkKind, Signal, MAX_LUT_FANIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const INPUTS: usize = 7;
const STEPS: usize = 60;

/// Replay a seeded random construction into `ntk`
fn random_circuit(mut ntk: GateNetwork, seed: u64) -> GateNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pool = ntk.add_inputs("x", INPUTS);
    pool.push(Signal::TRUE);

    for _ in 0..STEPS {
        let mut pick = |rng: &mut StdRng| {
            let s = pool[rng.gen_range(0..pool.len())];
            s.invert_if(rng.gen_bool(0.3))
        };
        let (a, b, c) = (pick(&mut rng), pick(&mut rng), pick(&mut rng));
        let signal = match rng.gen_range(0..8) {
            0 => ntk.and(a, b),
            1 => ntk.or(a, b),
            2 => ntk.xor(a, b),
            3 => ntk.nor(a, b),
            4 => ntk.majority(a, b, c),
            5 => ntk.xor3(a, b, c),
            6 => {
                let fanins: Vec<Signal> = (0..rng.gen_range(1..=MAX_LUT_FANIN))
                    .map(|_| pick(&mut rng))
                    .collect();
                let truth_table = rng.gen::<u64>();
                ntk.lut_node(&fanins, truth_table)
            }
            _ => {
                let signals: Vec<Signal> = (0..rng.gen_range(0..5)).map(|_| pick(&mut rng)).collect();
                ntk.nary_or(&signals)
            }
        };
        pool.push(signal);
    }

    let outputs: Vec<Signal> = pool.iter().rev().take(8).copied().collect();
    ntk.add_outputs("y", &outputs);
    ntk
}

fn tables(ntk: &GateNetwork) -> Vec<String> {
    ntk.truth_tables()
        .expect("exhaustive simulation")
        .iter()
        .map(|t| t.to_hex())
        .collect()
}

#[test]
fn test_kinds_agree_on_random_circuits() {
    for seed in 0..20 {
        let reference = tables(&random_circuit(GateNetwork::new("ref", NetworkKind::Aig), seed));
        for kind in NetworkKind::ALL {
            let ntk = random_circuit(GateNetwork::new("dut", kind), seed);
            assert_eq!(tables(&ntk), reference, "seed {} {:?}", seed, kind);

            let plain = random_circuit(
                GateNetwork::new("dut", kind).without_structural_hashing(),
                seed,
            );
            assert_eq!(tables(&plain), reference, "seed {} {:?} no strash", seed, kind);
        }
    }
}

#[test]
fn test_simulate_matches_evaluate() {
    let ntk = random_circuit(GateNetwork::new("sim", NetworkKind::Xmg), 99);
    let mut rng = StdRng::seed_from_u64(7);
    let words: Vec<u64> = (0..INPUTS).map(|_| rng.gen()).collect();
    let outputs = ntk.simulate(&words).expect("simulation");

    for pattern in 0..64 {
        let assignment: Vec<bool> = words.iter().map(|w| (w >> pattern) & 1 == 1).collect();
        let single = ntk.evaluate(&assignment).expect("evaluation");
        for (word, bit) in outputs.iter().zip(&single) {
            assert_eq!((word >> pattern) & 1 == 1, *bit, "pattern {}", pattern);
        }
    }
}

#[test]
fn test_cleanup_preserves_random_circuits() {
    for kind in NetworkKind::ALL {
        let ntk = random_circuit(GateNetwork::new("dut", kind), 5);
        let cleaned = ntk.cleanup_dangling();
        assert!(cleaned.gate_count() <= ntk.gate_count());
        assert_eq!(cleaned.input_count(), ntk.input_count());
        assert_eq!(tables(&cleaned), tables(&ntk));
    }
}
