use std::{fmt, str::FromStr};

use thiserror::Error;

const CPF_LEN: usize = 11;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CpfError {
    #[error("CPF deve ter 11 dígitos, foram informados {len}")]
    WrongLength { len: usize },
    #[error("CPF com todos os dígitos iguais não é válido")]
    RepeatedDigits,
    #[error("Dígitos verificadores do CPF não conferem")]
    ChecksumMismatch,
}

/// Validated CPF, stored as its 11 digits without punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
    /// Strips everything that is not an ASCII digit, then verifies length and check digits.
    pub fn parse(input: &str) -> Result<Self, CpfError> {
        let digits = normalize(input);
        let digits: [u8; CPF_LEN] = digits
            .as_slice()
            .try_into()
            .map_err(|_| CpfError::WrongLength { len: digits.len() })?;

        if digits.iter().all(|d| *d == digits[0]) {
            return Err(CpfError::RepeatedDigits);
        }
        if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
            return Err(CpfError::ChecksumMismatch);
        }
        Ok(Self(digits))
    }

    pub fn digits(&self) -> &[u8; CPF_LEN] {
        &self.0
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = |range: std::ops::Range<usize>| {
            self.0[range]
                .iter()
                .map(|d| char::from(b'0' + d))
                .collect::<String>()
        };
        write!(f, "{}.{}.{}-{}", d(0..3), d(3..6), d(6..9), d(9..11))
    }
}

pub fn is_valid(input: &str) -> bool {
    Cpf::parse(input).is_ok()
}

/// Digit values of every ASCII digit in `input`, in order.
pub(crate) fn normalize(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

// weights run from len+1 down to 2
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(d, w)| u32::from(*d) * w)
        .sum();
    match 11 - sum % 11 {
        10 | 11 => 0,
        r => r as u8,
    }
}
