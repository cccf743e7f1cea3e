use wirescan_wire::{Value, WireType};

/// One decoded field.
///
/// `offset` is where the field's tag starts in the decoded buffer. Within
/// a single pass, offsets are strictly increasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    /// Field number from the tag (`tag >> 3`), always ≥ 1.
    pub number: u64,
    pub wire_type: WireType,
    pub value: Value<'a>,
    pub offset: usize,
}
