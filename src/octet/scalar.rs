//! Scalar GF(2^8) slice kernels
//!
//! Baseline implementations of the three payload operations the solver and
//! synthesizer need:
//!
//! - **xor**: `output ^= input` (coefficient 1, the only LT row coefficient)
//! - **multiply**: `output = c * input` or `output ^= c * input` (see [`WriteOp`])
//! - **scale**: `buf = c * buf` in place
//!
//! Each kernel processes `min(input.len(), output.len())` bytes. SIMD variants
//! in [`super::simd`] handle whole vectors and fall back here for tails.

use super::{mul_table, Octet};

/// Specifies how to combine the multiplication result with the output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    /// Direct write: output = coefficient * input (replaces contents)
    Direct,
    /// Accumulate: output = output XOR (coefficient * input)
    Add,
}

/// `output ^= input`
#[inline]
pub fn xor_slice(input: &[u8], output: &mut [u8]) {
    // Simple loop - the compiler vectorizes it for the target CPU
    for (o, &i) in output.iter_mut().zip(input) {
        *o ^= i;
    }
}

/// Scalar multiply with configurable write mode
#[inline]
pub fn process_slice_multiply_mode(
    input: &[u8],
    output: &mut [u8],
    coefficient: Octet,
    mode: WriteOp,
) {
    let len = input.len().min(output.len());
    let (input, output) = (&input[..len], &mut output[..len]);

    match (coefficient.value(), mode) {
        (0, WriteOp::Direct) => output.fill(0),
        (0, WriteOp::Add) => {}
        (1, WriteOp::Direct) => output.copy_from_slice(input),
        (1, WriteOp::Add) => xor_slice(input, output),
        (_, WriteOp::Direct) => {
            let table = mul_table(coefficient);
            for (o, &i) in output.iter_mut().zip(input) {
                *o = table[i as usize];
            }
        }
        (_, WriteOp::Add) => {
            let table = mul_table(coefficient);
            for (o, &i) in output.iter_mut().zip(input) {
                *o ^= table[i as usize];
            }
        }
    }
}

/// `output ^= coefficient * input`
#[inline]
pub fn process_slice_multiply_add(input: &[u8], output: &mut [u8], coefficient: Octet) {
    process_slice_multiply_mode(input, output, coefficient, WriteOp::Add);
}

/// `buf = coefficient * buf`
#[inline]
pub fn scale_slice(buf: &mut [u8], coefficient: Octet) {
    match coefficient.value() {
        0 => buf.fill(0),
        1 => {}
        _ => {
            let table = mul_table(coefficient);
            for b in buf.iter_mut() {
                *b = table[*b as usize];
            }
        }
    }
}
