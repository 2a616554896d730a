//! Sequential code allocation.
//!
//! The allocator is pure: the current tail code goes in, the next batch comes
//! out. Uniqueness under concurrent generation is the storage layer's job
//! (UNIQUE constraint on the code column); the allocator only guarantees a
//! deterministic, strictly increasing, gap-free sequence.

use crate::{Error, Result};

/// Fixed width of every code. Zero-padding makes lexicographic order equal
/// numeric order.
pub const CODE_WIDTH: usize = 5;

/// Policy bound on one generation request, enforced before storage is
/// touched.
pub const MAX_BATCH: usize = 100;

/// Parse a code, rejecting anything that is not exactly [`CODE_WIDTH`] ASCII
/// digits. Never wraps or truncates.
pub fn parse_code(code: &str) -> Result<u32> {
  if code.len() != CODE_WIDTH || !code.bytes().all(|b| b.is_ascii_digit()) {
    return Err(Error::BadCode(code.to_owned()));
  }
  code.parse::<u32>().map_err(|_| Error::BadCode(code.to_owned()))
}

fn render_code(value: u32) -> String {
  format!("{value:0width$}", width = CODE_WIDTH)
}

fn max_code_value() -> u32 {
  10u32.pow(CODE_WIDTH as u32) - 1
}

/// The next code after `last`, or `"00001"` when no code exists yet.
pub fn allocate_next(last: Option<&str>) -> Result<String> {
  let Some(last) = last else {
    return Ok(render_code(1));
  };
  let value = parse_code(last)?;
  if value >= max_code_value() {
    return Err(Error::CodeSpaceExhausted(last.to_owned()));
  }
  Ok(render_code(value + 1))
}

/// `count` strictly increasing, pairwise-distinct, gap-free codes following
/// `last`. Fails with [`Error::InvalidCount`] outside `1..=MAX_BATCH`.
pub fn allocate_batch(last: Option<&str>, count: usize) -> Result<Vec<String>> {
  if count < 1 || count > MAX_BATCH {
    return Err(Error::InvalidCount(count));
  }

  let mut codes = Vec::with_capacity(count);
  let mut cursor = last.map(str::to_owned);
  for _ in 0..count {
    let next = allocate_next(cursor.as_deref())?;
    cursor = Some(next.clone());
    codes.push(next);
  }
  Ok(codes)
}
