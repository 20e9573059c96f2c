/*
    Hash module includes the hash functions needed
    to derive mnemonic checksums.
*/

use crate::{
    Sha256, Digest
};

/*
    Takes in a byte array and returns the sha256 hash of it as a 32 byte array
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    r.finalize().into()
}
