//! Reed-Solomon error correction for QR codes
//! QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1

/// GF(256) field operations using log/exp tables
pub struct Gf256;

const PRIMITIVE: u16 = 0x11D;

/// exp[i] = alpha^i for i in 0..255, exp[255] wraps to 1; log is its inverse
const fn build_tables() -> ([u8; 256], [u8; 256]) {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE;
        }
        i += 1;
    }
    exp[255] = exp[0];
    (exp, log)
}

const TABLES: ([u8; 256], [u8; 256]) = build_tables();
static EXP_TABLE: [u8; 256] = TABLES.0;
static LOG_TABLE: [u8; 256] = TABLES.1;

impl Gf256 {
    /// Field product
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// Field quotient; panics when `b` is zero
    pub fn div(a: u8, b: u8) -> u8 {
        assert!(b != 0, "Division by zero in GF(256)");
        if a == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + 255 - log_b) % 255]
    }

    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }

    /// Discrete logarithm base alpha; `None` for zero
    pub fn log(a: u8) -> Option<u8> {
        (a != 0).then(|| LOG_TABLE[a as usize])
    }

    /// a^n
    pub fn pow(a: u8, n: usize) -> u8 {
        if a == 0 {
            return if n == 0 { 1 } else { 0 };
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        EXP_TABLE[(log_a * (n % 255)) % 255]
    }
}

/// Generator polynomial prod_{i < degree} (x - alpha^i)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPolynomial {
    /// Coefficients from x^degree down to x^0; the leading one is always 1
    coefficients: Vec<u8>,
}

impl GeneratorPolynomial {
    /// Build the generator of `degree`, which must be 1..=255
    pub fn new(degree: usize) -> Self {
        assert!((1..=255).contains(&degree), "generator degree out of range: {degree}");
        let mut coefficients = vec![1u8];
        for i in 0..degree {
            let root = Gf256::exp(i);
            // multiply by (x + root)
            let mut next = vec![0u8; coefficients.len() + 1];
            for (j, &c) in coefficients.iter().enumerate() {
                next[j] ^= c;
                next[j + 1] ^= Gf256::mul(c, root);
            }
            coefficients = next;
        }
        Self { coefficients }
    }

    /// Number of roots
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients, highest power first
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }
}

/// Reed-Solomon encoder producing `degree` ECC codewords per block
pub struct ReedSolomonEncoder {
    generator: GeneratorPolynomial,
}

impl ReedSolomonEncoder {
    /// Encoder for `num_ecc_codewords` ECC bytes per block
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            generator: GeneratorPolynomial::new(num_ecc_codewords),
        }
    }

    /// Remainder of data(x) * x^degree divided by the generator
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let divisor = &self.generator.coefficients()[1..];
        let mut remainder = vec![0u8; divisor.len()];
        for &d in data {
            let factor = d ^ remainder[0];
            remainder.rotate_left(1);
            if let Some(last) = remainder.last_mut() {
                *last = 0;
            }
            for (r, &g) in remainder.iter_mut().zip(divisor) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }
}

/// Evaluate `codeword` (highest degree first) at alpha^0 .. alpha^(count-1)
///
/// All zero for an intact block of data followed by its ECC codewords.
pub fn syndromes(codeword: &[u8], count: usize) -> Vec<u8> {
    (0..count)
        .map(|i| {
            let x = Gf256::exp(i);
            codeword
                .iter()
                .fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
        })
        .collect()
}
