//! One-shot key issuance: load the secret key, draw a single nonce and sign
//! every permitted artifact name with it.
//!
//! # ⚠️ Warning
//!
//! Every artifact is signed with the *same* nonce. Any two issued signatures
//! are enough to recover the secret key with
//! [`recover_secret_key`](crate::ecdsa::nonce_reuse::recover_secret_key).

use crate::{
    AffinePoint, Curve, Error, Nonce, Result, SecretKey,
    ecdsa::{self, Signature},
};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use num_bigint::BigInt;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Where [`KeyIssuance::from_config`] finds its inputs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssuanceConfig {
    /// File whose first line holds the base-10 secret key.
    pub secret_key_path: PathBuf,

    /// Directory whose regular files are the artifacts to sign.
    pub artifact_dir: PathBuf,

    /// File names never signed.
    pub blocked: Vec<String>,
}

impl Default for IssuanceConfig {
    fn default() -> Self {
        Self {
            secret_key_path: PathBuf::from("sec_key.txt"),
            artifact_dir: PathBuf::from("."),
            blocked: ["sec_key.txt", "flag.txt", "solution.py"]
                .map(ToString::to_string)
                .to_vec(),
        }
    }
}

/// Artifact name together with its issued signature.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SignedArtifact {
    /// Artifact (file) name which was signed.
    pub name: String,

    /// `r` component of the signature.
    pub r: BigInt,

    /// `s` component of the signature.
    pub s: BigInt,
}

impl SignedArtifact {
    /// Get the signature over [`SignedArtifact::name`].
    pub fn signature(&self) -> Signature {
        Signature::new(self.r.clone(), self.s.clone())
    }
}

/// Public key and signed artifact list computed once at startup.
///
/// Immutable after construction; share it (e.g. behind an `Arc`) between
/// request handlers, which only ever call [`KeyIssuance::verify`].
#[derive(Clone, Debug)]
pub struct KeyIssuance {
    curve: Curve,
    public_key: AffinePoint,
    artifacts: Vec<SignedArtifact>,
}

impl KeyIssuance {
    /// Sign each of `names`, in order, with `secret_key` and the single shared
    /// `nonce`.
    pub fn new<I>(curve: Curve, secret_key: &SecretKey, nonce: &Nonce, names: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let public_key = secret_key.public_key(&curve);

        let artifacts = names
            .into_iter()
            .map(|name| -> Result<SignedArtifact> {
                let name: String = name.into();
                let (_, sig) = ecdsa::sign(&name, &curve, nonce, secret_key, &public_key)?;
                let (r, s) = sig.split();
                Ok(SignedArtifact { name, r, s })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            curve,
            public_key,
            artifacts,
        })
    }

    /// Load the secret key, enumerate the artifact directory and draw the
    /// nonce from the operating system's RNG, then sign.
    ///
    /// Any failure here is fatal for the process embedding the issuer.
    pub fn from_config(curve: Curve, config: &IssuanceConfig) -> Result<Self> {
        let secret_key = load_secret_key(&config.secret_key_path, &curve)?;
        let names = allowed_artifacts(&config.artifact_dir, &config.blocked)?;
        let nonce = Nonce::generate(&curve)?;
        Self::new(curve, &secret_key, &nonce, names)
    }

    /// Curve the artifacts were signed over.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Public key `Q = d·G` of the issuer.
    pub fn public_key(&self) -> &AffinePoint {
        &self.public_key
    }

    /// Issued signatures, in the order the names were given.
    pub fn artifacts(&self) -> &[SignedArtifact] {
        &self.artifacts
    }

    /// Look up the issued signature for `name`.
    pub fn artifact(&self, name: &str) -> Option<&SignedArtifact> {
        self.artifacts.iter().find(|artifact| artifact.name == name)
    }

    /// Verify a claimed signature over `name` against the issuer's public key.
    pub fn verify(&self, name: &str, signature: &Signature) -> bool {
        ecdsa::verify(name, &self.curve, &self.public_key, signature)
    }
}

/// Read a base-10 secret key from the first line of the file at `path`.
///
/// A missing file is [`Error::Io`], an empty or non-numeric first line is
/// [`Error::Parse`] and a value outside `[1, n)` is [`Error::Validation`].
pub fn load_secret_key(path: impl AsRef<Path>, curve: &Curve) -> Result<SecretKey> {
    let contents = fs::read_to_string(path)?;
    let line = contents.lines().next().ok_or(Error::Parse)?;
    SecretKey::from_decimal(line, curve)
}

/// Names of the regular files in `dir`, in directory enumeration order,
/// skipping any listed in `blocked` and any which are not valid UTF-8.
pub fn allowed_artifacts<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    blocked: &[S],
) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;

        if !entry.path().is_file() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };

        if blocked.iter().any(|b| b.as_ref() == name) {
            continue;
        }

        names.push(name);
    }

    Ok(names)
}
