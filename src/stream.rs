//! RustCrypto `cipher` trait implementations for [`Grain128`].
//!
//! Lets the engine be used anywhere a `KeyIvInit + StreamCipher` is
//! expected. The keystream never runs out, so applying it never fails.

use cipher::consts::{U12, U16};
use cipher::inout::InOutBuf;
use cipher::{Iv, IvSizeUser, Key, KeyIvInit, KeySizeUser, StreamCipher, StreamCipherError};

use crate::grain128::Grain128;
use crate::utils::converter::{IV_SIZE, KEY_SIZE};

impl KeySizeUser for Grain128 {
    type KeySize = U16;
}

impl IvSizeUser for Grain128 {
    type IvSize = U12;
}

impl KeyIvInit for Grain128 {
    fn new(key: &Key<Self>, iv: &Iv<Self>) -> Self {
        let mut key_bytes = [0u8; KEY_SIZE];
        key_bytes.copy_from_slice(key);
        let mut iv_bytes = [0u8; IV_SIZE];
        iv_bytes.copy_from_slice(iv);
        Grain128::new(&key_bytes, &iv_bytes)
    }
}

impl StreamCipher for Grain128 {
    fn try_apply_keystream_inout(
        &mut self,
        mut buf: InOutBuf<'_, '_, u8>,
    ) -> Result<(), StreamCipherError> {
        for i in 0..buf.len() {
            let k = self.next_byte();
            let mut pair = buf.get(i);
            *pair.get_out() = *pair.get_in() ^ k;
        }
        Ok(())
    }
}
