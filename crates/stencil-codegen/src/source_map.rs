//! Source mapping from generated JavaScript positions back to the template.
//!
//! [`SourceMapGenerator`] collects one [`Mapping`] per tagged `push` while
//! the code is being emitted, then serialises them as a revision-3 source
//! map: a single source (the template), its full text in `sourcesContent`,
//! and Base64 VLQ `mappings`.
//!
//! Lines are 1-based and columns 0-based, the convention of the JavaScript
//! source-map tooling.

use serde::{Deserialize, Serialize};

use crate::types::SOURCE_MAP_VERSION;

/// One generated position → original position correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub generated_line: u32,
    pub generated_column: u32,
    pub original_line: u32,
    pub original_column: u32,
}

/// Accumulates mappings during a single codegen pass.
#[derive(Debug, Clone)]
pub struct SourceMapGenerator {
    source: String,
    source_content: String,
    mappings: Vec<Mapping>,
}

impl SourceMapGenerator {
    pub fn new(source: impl Into<String>, source_content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            source_content: source_content.into(),
            mappings: Vec::new(),
        }
    }

    /// Record a mapping. Mappings must arrive in generated order.
    pub fn add_mapping(&mut self, mapping: Mapping) {
        debug_assert!(
            self.mappings.last().map_or(true, |last| {
                (last.generated_line, last.generated_column)
                    <= (mapping.generated_line, mapping.generated_column)
            }),
            "mappings must be added in generated order"
        );
        self.mappings.push(mapping);
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    /// Serialise the collected mappings.
    pub fn finish(self) -> SourceMap {
        let mappings = encode_mappings(&self.mappings);
        SourceMap {
            version: SOURCE_MAP_VERSION,
            file: None,
            sources: vec![self.source],
            sources_content: vec![self.source_content],
            names: Vec::new(),
            mappings,
        }
    }
}

/// A complete revision-3 source map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub sources: Vec<String>,
    #[serde(default)]
    pub sources_content: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMap {
    /// Serialize to JSON bytes.
    pub fn to_json(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }

    /// Deserialize from JSON bytes.
    pub fn from_json(data: &[u8]) -> Option<Self> {
        serde_json::from_slice(data).ok()
    }

    /// Decode `mappings` back into individual records.
    ///
    /// Returns `None` if the string is not valid VLQ. Segments without an
    /// original position are skipped.
    pub fn decoded_mappings(&self) -> Option<Vec<Mapping>> {
        decode_mappings(&self.mappings)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Mappings encoding
// ══════════════════════════════════════════════════════════════════════════════

fn encode_mappings(mappings: &[Mapping]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Mapping> = None;
    let mut line = 1u32;
    let mut prev_gen_col = 0i64;
    let mut prev_orig_line = 0i64;
    let mut prev_orig_col = 0i64;

    for m in mappings {
        if prev == Some(m) {
            continue;
        }
        if m.generated_line != line {
            while line < m.generated_line {
                out.push(';');
                line += 1;
            }
            prev_gen_col = 0;
        } else if prev.is_some() {
            out.push(',');
        }

        let orig_line = i64::from(m.original_line) - 1;
        vlq::encode(i64::from(m.generated_column) - prev_gen_col, &mut out);
        // single source: the index delta is always zero
        vlq::encode(0, &mut out);
        vlq::encode(orig_line - prev_orig_line, &mut out);
        vlq::encode(i64::from(m.original_column) - prev_orig_col, &mut out);

        prev_gen_col = i64::from(m.generated_column);
        prev_orig_line = orig_line;
        prev_orig_col = i64::from(m.original_column);
        prev = Some(m);
    }
    out
}

fn decode_mappings(mappings: &str) -> Option<Vec<Mapping>> {
    let mut decoded = Vec::new();
    let mut gen_col = 0i64;
    let mut orig_line = 0i64;
    let mut orig_col = 0i64;

    for (line_idx, line) in mappings.split(';').enumerate() {
        gen_col = if line_idx == 0 { gen_col } else { 0 };
        for segment in line.split(',').filter(|s| !s.is_empty()) {
            let mut rest = segment;
            let mut fields = [0i64; 5];
            let mut count = 0;
            while !rest.is_empty() {
                if count == fields.len() {
                    return None;
                }
                let (value, consumed) = vlq::decode(rest)?;
                fields[count] = value;
                count += 1;
                rest = &rest[consumed..];
            }

            gen_col += fields[0];
            if count < 4 {
                continue;
            }
            orig_line += fields[2];
            orig_col += fields[3];
            decoded.push(Mapping {
                generated_line: u32::try_from(line_idx + 1).ok()?,
                generated_column: u32::try_from(gen_col).ok()?,
                original_line: u32::try_from(orig_line + 1).ok()?,
                original_column: u32::try_from(orig_col).ok()?,
            });
        }
    }
    Some(decoded)
}

/// Base64 VLQ, as used by the `mappings` field.
pub mod vlq {
    const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    const SHIFT: u32 = 5;
    const CONTINUATION: u64 = 1 << SHIFT;
    const MASK: u64 = CONTINUATION - 1;

    /// Append the VLQ encoding of `value` to `out`.
    pub fn encode(value: i64, out: &mut String) {
        let mut vlq = if value < 0 {
            (value.unsigned_abs() << 1) | 1
        } else {
            (value as u64) << 1
        };
        loop {
            let mut digit = vlq & MASK;
            vlq >>= SHIFT;
            if vlq > 0 {
                digit |= CONTINUATION;
            }
            out.push(BASE64[digit as usize] as char);
            if vlq == 0 {
                break;
            }
        }
    }

    /// Decode one value from the front of `input`.
    ///
    /// Returns the value and the number of bytes consumed.
    pub fn decode(input: &str) -> Option<(i64, usize)> {
        let mut result = 0u64;
        let mut shift = 0u32;
        for (i, b) in input.bytes().enumerate() {
            let digit = BASE64.iter().position(|&c| c == b)? as u64;
            if shift > 60 {
                return None;
            }
            result |= (digit & MASK) << shift;
            if digit & CONTINUATION == 0 {
                let magnitude = (result >> 1) as i64;
                let value = if result & 1 == 1 { -magnitude } else { magnitude };
                return Some((value, i + 1));
            }
            shift += SHIFT;
        }
        None
    }
}
