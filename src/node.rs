//! Packing and unpacking of 32-bit node words.
//!
//! Every node in a [`crate::JsonTree`] is one `u32`: a 3-bit kind tag in the
//! low bits and a 29-bit operand in the high bits. For atoms the operand is
//! either unused (`Null`), a boolean flag (`Bool`), or an atom id
//! (`Int`/`Float`/`String`). For containers (`Object`/`Array`/`KeyValuePair`)
//! the operand is the span: the number of node words the subtree occupies,
//! counting the container word itself.

/// Number of bits reserved for the kind tag.
const KIND_BITS: u32 = 3;
const KIND_MASK: u32 = (1 << KIND_BITS) - 1;

/// Largest operand a node word can carry.
pub const MAX_OPERAND: u32 = (1 << (32 - KIND_BITS)) - 1;

/// The tag stored in the low bits of a node word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    Null = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Object = 5,
    Array = 6,
    KeyValuePair = 7,
}

impl Kind {
    /// `true` for the four leaf kinds, which never have children and whose
    /// span is always 1.
    #[must_use]
    pub fn is_atom(self) -> bool {
        matches!(self, Kind::Null | Kind::Bool | Kind::Int | Kind::Float | Kind::String)
    }

    /// `true` for the three kinds whose operand is a span rather than a
    /// value or atom id.
    #[must_use]
    pub fn is_container(self) -> bool {
        !self.is_atom()
    }
}

impl TryFrom<u32> for Kind {
    type Error = ();

    fn try_from(tag: u32) -> Result<Self, ()> {
        match tag {
            0 => Ok(Kind::Null),
            1 => Ok(Kind::Bool),
            2 => Ok(Kind::Int),
            3 => Ok(Kind::Float),
            4 => Ok(Kind::String),
            5 => Ok(Kind::Object),
            6 => Ok(Kind::Array),
            7 => Ok(Kind::KeyValuePair),
            _ => Err(()),
        }
    }
}

/// Packs a kind and an operand into one node word.
///
/// # Panics
///
/// Panics (via `debug_assert!`) if `operand` does not fit in 29 bits. A
/// document would need well over a hundred million nodes, or an atom table
/// of that size, to reach this limit; tripping it is a programming error,
/// not a user-facing condition, matching how the rest of the library treats
/// invariant violations (see the root crate docs).
#[must_use]
pub fn pack(kind: Kind, operand: u32) -> u32 {
    debug_assert!(operand <= MAX_OPERAND, "operand {operand} overflows 29 bits");
    (operand << KIND_BITS) | (kind as u32)
}

/// Extracts the kind tag from a node word.
///
/// # Panics
///
/// Panics if the low 3 bits do not name one of the 8 defined kinds. This
/// can only happen if a node word was corrupted by code outside this
/// crate's mutation engine.
#[must_use]
pub fn kind_of(word: u32) -> Kind {
    Kind::try_from(word & KIND_MASK).expect("node word has an invalid kind tag")
}

/// Extracts the operand from a node word.
#[must_use]
pub fn operand_of(word: u32) -> u32 {
    word >> KIND_BITS
}
