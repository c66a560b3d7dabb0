//! A cap-join (glossary): the same 5-vertex fan as [`crate::miter_join`],
//! tagged `cap_join` on its two apex vertices, stored in its own
//! `cap_joins` point-set. Used by dashed stroking when a dash boundary
//! falls on a real corner and needs cap-like geometry there instead of a
//! miter join — hence every join gets one regardless of dash state, since
//! width and dashing are not inputs to this generator.

use crate::buffers::MeshBuilder;
use crate::join_common::CommonJoinData;
use crate::miter_join::emit_with_kind;
use crate::vertex::PointKind;
use core::ops::Range;

pub fn emit(mesh: &mut MeshBuilder, closing: bool, common: &CommonJoinData) -> (Range<usize>, Range<usize>) {
    emit_with_kind(mesh, closing, common, PointKind::CapJoin)
}
