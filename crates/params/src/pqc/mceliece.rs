//! Parameter sets for McEliece-shaped encryption

/// Structure containing the parameters of a code-based key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeParams {
    /// Code length
    pub n: usize,

    /// Error weight
    pub t: usize,

    /// Code dimension (length of the PKC message argument)
    pub k: usize,
}

/// Small parameters for fast round trips
pub const CODE_192_5: CodeParams = CodeParams {
    n: 192,
    t: 5,
    k: 16,
};

/// n = 1024, t = 38
pub const CODE_1024_38: CodeParams = CodeParams {
    n: 1024,
    t: 38,
    k: 10,
};

/// n = 2048, t = 69
pub const CODE_2048_69: CodeParams = CodeParams {
    n: 2048,
    t: 69,
    k: 11,
};

/// n = 4096, t = 128
pub const CODE_4096_128: CodeParams = CodeParams {
    n: 4096,
    t: 128,
    k: 12,
};

/// Upper bound on scrambler draws before key generation gives up
pub const MAX_SCRAMBLER_ATTEMPTS: usize = 64;
