//! Constants for Elliptic Curve Diffie-Hellman over NIST P-384

/// Size of the shared secret (the affine x-coordinate), in bytes
pub const ECDH_P384_SHARED_SECRET_SIZE: usize = 48;

/// Size of a public key in compressed SEC1 form, in bytes
pub const ECDH_P384_PUBLIC_KEY_SIZE: usize = 49;

/// Size of a public key in uncompressed SEC1 form, in bytes
pub const ECDH_P384_PUBLIC_KEY_UNCOMPRESSED_SIZE: usize = 97;

/// Size of a private key, in bytes
pub const ECDH_P384_PRIVATE_KEY_SIZE: usize = 48;
