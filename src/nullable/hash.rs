use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::LazyLock;

use hashbrown::hash_map::DefaultHashBuilder;

use super::Nullable;

static HASH_BUILDER: LazyLock<DefaultHashBuilder> = LazyLock::new(DefaultHashBuilder::default);

/// Hash contribution of a null, shared by nulls of every element type
pub static NULL_HASH: LazyLock<u64> = LazyLock::new(|| HASH_BUILDER.hash_one(super::NULL_LITERAL));

impl<T: Hash> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Nullable::Value(x) => {
                state.write_u8(1);
                x.hash(state);
            }
            Nullable::Null => {
                state.write_u8(0);
                state.write_u64(*NULL_HASH);
            }
        }
    }
}

impl<T: Hash> Nullable<T> {
    /// Hash the container, offset by `seed`
    ///
    /// For a fixed seed, every null hashes to the same value no matter its
    /// element type.
    pub fn hash_with_seed(&self, seed: u64) -> u64 {
        let mut state = HASH_BUILDER.build_hasher();
        state.write_u64(seed);
        self.hash(&mut state);
        state.finish()
    }
}
