//! Published P-384 known-answer vectors

/// RFC 6979 §A.2.6 private key x
pub const RFC6979_PRIVATE_KEY: &str =
    "6B9D3DAD2E1B8C1C05B19875B6659F4DE23C3B667BF297BA9AA47740787137D896D5724E4C70A825F872C9EA60D2EDF5";

/// RFC 6979 §A.2.6 public key Ux
pub const RFC6979_PUBLIC_X: &str =
    "EC3A4E415B4E19A4568618029F427FA5DA9A8BC4AE92E02E06AAE5286B300C64DEF8F0EA9055866064A254515480BC13";

/// RFC 6979 §A.2.6 public key Uy
pub const RFC6979_PUBLIC_Y: &str =
    "8015D9B72D7D57244EA8EF9AC0C621896708A59367F9DFB9F54CA84B3F1C9DB1288B231C3AE0D4FE7344FD2533264720";

/// A deterministic SHA-384 signature from RFC 6979 §A.2.6
pub struct DeterministicSignature {
    /// Signed message (hashed with SHA-384)
    pub message: &'static [u8],
    /// Expected r
    pub r: &'static str,
    /// Expected s
    pub s: &'static str,
}

/// The SHA-384 "sample" and "test" signatures
pub const RFC6979_SHA384: [DeterministicSignature; 2] = [
    DeterministicSignature {
        message: b"sample",
        r: "94EDBB92A5ECB8AAD4736E56C691916B3F88140666CE9FA73D64C4EA95AD133C81A648152E44ACF96E36DD1E80FABE46",
        s: "99EF4AEB15F178CEA1FE40DB2603138F130E740A19624526203B6351D0A3A94FA329C145786E679E7B82C71A38628AC8",
    },
    DeterministicSignature {
        message: b"test",
        r: "8203B63D3C853E8D77227FB377BCF7B7B772E97892A80F36AB775D509D7A5FEB0542A7F0812998DA8F1DD3CA3CF023DB",
        s: "DDD0760448D42D8A43AF45AF836FCE4DE8BE06B485E9B61B827C2F13173923E06A739F040649A667BF3B828246BAA5A5",
    },
];

/// The generator G in compressed form (y is odd)
pub const GENERATOR_COMPRESSED: &str = "03AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C3A545E3872760AB7";

/// x-coordinate of 2G
pub const TWO_G_X: &str =
    "08D999057BA3D2D969260045C55B97F089025959A6F434D651D207D19FB96E9E4FE0E86EBE0E64F85B96A9C75295DF61";
