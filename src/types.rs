// Storage type for the values and positions held in a set's backing arrays.
//
// Every stored number is below the set's capacity, so a capacity up to
// `MAX_CAPACITY` always round-trips through `from_index` / `index`.
pub trait Slot: Copy + Clone + Eq + PartialEq + Default + std::fmt::Debug {
    const MAX_CAPACITY: usize;

    fn from_index(index: usize) -> Self;

    fn index(self) -> usize;
}

const fn clamp_to_usize(max: u64) -> usize {
    if max > usize::MAX as u64 {
        usize::MAX
    } else {
        max as usize
    }
}

macro_rules! impl_slot {
    ($($ty:ty),*) => {
        $(
            impl Slot for $ty {
                const MAX_CAPACITY: usize = clamp_to_usize(<$ty>::MAX as u64);

                #[inline]
                fn from_index(index: usize) -> Self {
                    debug_assert!(index <= Self::MAX_CAPACITY);
                    index as $ty
                }

                #[inline]
                fn index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_slot!(u8, u16, u32, u64, usize);

/// Largest capacity accepted by the default `NumSet`, whose backing arrays
/// store `u32` slots.
pub const MAX_CAPACITY: usize = <u32 as Slot>::MAX_CAPACITY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_capacity_per_slot() {
        assert_eq!(<u8 as Slot>::MAX_CAPACITY, 255);
        assert_eq!(<u16 as Slot>::MAX_CAPACITY, 65_535);
        assert_eq!(<usize as Slot>::MAX_CAPACITY, usize::MAX);
        assert_eq!(MAX_CAPACITY, <u32 as Slot>::MAX_CAPACITY);
    }

    #[test]
    fn test_slot_round_trip_at_the_top() {
        let top = <u16 as Slot>::MAX_CAPACITY;
        assert_eq!(u16::from_index(top).index(), top);
        assert_eq!(u16::from_index(top), u16::MAX);
    }
}
