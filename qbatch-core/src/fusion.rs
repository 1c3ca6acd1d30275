//! Gate fusion: regrouping a resolved gate list for sequential application
//!
//! Runs of single-qubit gates on the same qubit are composed into one 2×2
//! matrix by multiplying their unitaries (later gate on the left). A
//! two-qubit gate acts as a barrier for the qubits it touches: their
//! pending products are emitted first, then the two-qubit gate. Single-qubit
//! gates on distinct qubits commute, so reordering across qubits is safe.
//!
//! Fusion only regroups; it never drops gates, so a circuit fuses to an
//! empty sequence exactly when it has no gates at all.

use crate::circuit::{FusedOp, ResolvedGate};
use crate::matrices::multiply_2x2;
use ahash::AHashMap;
use num_complex::Complex64;

/// Fuse a resolved gate list into the sequence the simulator applies
pub fn fuse(ops: &[ResolvedGate]) -> Vec<FusedOp> {
    let mut fused = Vec::with_capacity(ops.len());
    // Accumulated matrix per qubit, plus first-seen order for the final flush
    let mut pending: AHashMap<usize, [[Complex64; 2]; 2]> = AHashMap::new();
    let mut pending_order: Vec<usize> = Vec::new();

    let mut flush =
        |qubit: usize,
         pending: &mut AHashMap<usize, [[Complex64; 2]; 2]>,
         pending_order: &mut Vec<usize>,
         fused: &mut Vec<FusedOp>| {
            if let Some(matrix) = pending.remove(&qubit) {
                pending_order.retain(|&q| q != qubit);
                fused.push(FusedOp::Single {
                    qubit: qubit.into(),
                    matrix,
                });
            }
        };

    for op in ops {
        match *op {
            ResolvedGate::Single { qubit, matrix, .. } => {
                let q = qubit.index();
                match pending.get_mut(&q) {
                    Some(acc) => *acc = multiply_2x2(&matrix, acc),
                    None => {
                        pending.insert(q, matrix);
                        pending_order.push(q);
                    }
                }
            }
            ResolvedGate::CNot { control, target } => {
                flush(control.index(), &mut pending, &mut pending_order, &mut fused);
                flush(target.index(), &mut pending, &mut pending_order, &mut fused);
                fused.push(FusedOp::CNot { control, target });
            }
            ResolvedGate::CZ { a, b } => {
                flush(a.index(), &mut pending, &mut pending_order, &mut fused);
                flush(b.index(), &mut pending, &mut pending_order, &mut fused);
                fused.push(FusedOp::CZ { a, b });
            }
        }
    }

    // Emit remaining runs in first-seen order
    for q in pending_order {
        let matrix = pending.remove(&q).expect("pending order tracks pending");
        fused.push(FusedOp::Single {
            qubit: q.into(),
            matrix,
        });
    }

    fused
}
