mod common;

use arithgen_core::{restoring_divider, restoring_divider_with, ArithError, Division, Strategy};
use arithgen_net::{GateNetwork, NetworkKind};
use common::{from_bits, mask, run, Exhaustive};

fn build(
    kind: NetworkKind,
    width: usize,
    make: impl FnOnce(&mut GateNetwork, &[arithgen_net::Signal], &[arithgen_net::Signal]) -> Division,
) -> GateNetwork {
    let mut ntk = GateNetwork::new("div", kind);
    let a = ntk.add_inputs("a", width);
    let b = ntk.add_inputs("b", width);
    let division = make(&mut ntk, &a, &b);
    assert_eq!(division.quotient.len(), width);
    assert_eq!(division.remainder.len(), width);
    ntk.add_outputs("q", &division.quotient);
    ntk.add_outputs("r", &division.remainder);
    ntk
}

/// Every dividend against every non-zero divisor
fn check_division(ntk: &GateNetwork, width: usize, label: &str) {
    let outputs = Exhaustive::new(ntk);
    for m in outputs.assignments() {
        let (a, b) = (m as u64 & mask(width), m as u64 >> width);
        if b == 0 {
            continue;
        }
        let quotient = outputs.value(m, 0..width);
        let remainder = outputs.value(m, width..2 * width);
        assert_eq!(quotient * b + remainder, a, "{} n={}: {} / {}", label, width, a, b);
        assert!(remainder < b, "{} n={}: {} % {}", label, width, a, b);
    }
}

#[test]
fn test_restoring_divider() {
    common::init_tracing();
    for width in 1..=8 {
        let ntk = build(NetworkKind::Aig, width, |ntk, a, b| {
            restoring_divider(ntk, a, b).expect("divider")
        });
        check_division(&ntk, width, "restoring");
    }
}

#[test]
fn test_restoring_divider_with_every_subtractor() {
    for strategy in Strategy::subtractors() {
        for width in 1..=8 {
            let ntk = build(NetworkKind::Xag, width, |ntk, a, b| {
                restoring_divider_with(ntk, a, b, strategy).expect("divider")
            });
            check_division(&ntk, width, strategy.name());
        }
    }
}

#[test]
fn test_divider_on_every_network_kind() {
    for kind in NetworkKind::ALL {
        let ntk = build(kind, 4, |ntk, a, b| {
            restoring_divider(ntk, a, b).expect("divider")
        });
        check_division(&ntk, 4, kind.name());
        let ntk = build(kind, 4, |ntk, a, b| {
            restoring_divider_with(ntk, a, b, Strategy::HanCarlson).expect("divider")
        });
        check_division(&ntk, 4, kind.name());
    }
}

#[test]
fn test_division_by_zero_gives_all_ones_quotient() {
    let width = 4;
    let ntk = build(NetworkKind::Aig, width, |ntk, a, b| {
        restoring_divider(ntk, a, b).expect("divider")
    });
    for a in 0..16u64 {
        let out = run(&ntk, &[(a, width), (0, width)]);
        assert_eq!(from_bits(&out[..width]), 0b1111);
        assert_eq!(from_bits(&out[width..]), a);
    }
}

#[test]
fn test_divider_rejects_bad_operands() -> anyhow::Result<()> {
    let mut ntk = GateNetwork::new("div", NetworkKind::Aig);
    let a = ntk.add_inputs("a", 4);
    let b = ntk.add_inputs("b", 3);

    let err = restoring_divider(&mut ntk, &a, &b).expect_err("width mismatch");
    assert!(err.is_shape_error());

    let err = restoring_divider_with(&mut ntk, &a, &a, Strategy::CarryLookahead)
        .expect_err("adder-only strategy");
    assert_eq!(
        err,
        ArithError::UnsupportedStrategy {
            strategy: Strategy::CarryLookahead,
            context: "division"
        }
    );
    assert_eq!(ntk.gate_count(), 0);

    restoring_divider_with(&mut ntk, &a, &a, Strategy::BorrowLookahead)?;
    assert!(ntk.gate_count() > 0);
    Ok(())
}
