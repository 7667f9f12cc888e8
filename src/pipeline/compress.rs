//! Compressed artifacts for web delivery
//!
//! Produces `.gz` and `.br` siblings of an exported word list so a web
//! server can hand browsers the precompressed form. Each codec runs at its
//! maximum effort over the whole file as a single block.

use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A compression scheme for exported word lists
///
/// Which codecs run is an explicit choice of the caller; there is no
/// capability probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// gzip at level 9
    Gzip,
    /// brotli at quality 11, window 22
    Brotli,
}

impl Codec {
    /// Both codecs, in the order artifacts are produced
    pub const ALL: [Self; 2] = [Self::Gzip, Self::Brotli];

    /// File extension appended to the input filename
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Gzip => "gz",
            Self::Brotli => "br",
        }
    }

    /// Human-readable codec name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Brotli => "brotli",
        }
    }
}

/// One compressed sibling of an input file
#[derive(Debug, Clone)]
pub struct Artifact {
    pub codec: Codec,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Compress a whole buffer with one codec
///
/// # Errors
/// Returns an error if the underlying encoder fails.
pub fn compress_block(data: &[u8], codec: Codec) -> Result<Vec<u8>> {
    match codec {
        Codec::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
            encoder.write_all(data).context("gzip compression failed")?;
            encoder.finish().context("gzip compression failed")
        }
        Codec::Brotli => {
            let params = BrotliEncoderParams {
                quality: 11,
                lgwin: 22,
                ..BrotliEncoderParams::default()
            };
            let mut output = Vec::new();
            brotli::BrotliCompress(&mut &data[..], &mut output, &params)
                .context("brotli compression failed")?;
            Ok(output)
        }
    }
}

/// Compress a file with each requested codec
///
/// Each artifact lands next to the input, named by appending the codec's
/// extension (`words.json` → `words.json.gz`). Existing artifacts are
/// overwritten.
///
/// # Errors
/// Returns an error if the input file cannot be read or an artifact cannot
/// be written. A missing input file produces no partial output.
pub fn compress_file<P: AsRef<Path>>(input: P, codecs: &[Codec]) -> Result<Vec<Artifact>> {
    let input = input.as_ref();
    let data = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;

    let mut artifacts = Vec::with_capacity(codecs.len());
    for &codec in codecs {
        let compressed = compress_block(&data, codec)?;
        let path = artifact_path(input, codec);
        fs::write(&path, &compressed)
            .with_context(|| format!("failed to write {}", path.display()))?;

        log::info!(
            "{}: {} -> {} bytes ({})",
            codec.name(),
            data.len(),
            compressed.len(),
            path.display()
        );

        artifacts.push(Artifact {
            codec,
            path,
            bytes: compressed.len() as u64,
        });
    }

    Ok(artifacts)
}

fn artifact_path(input: &Path, codec: Codec) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(codec.extension());
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn gzip_round_trip() {
        let data = br#"["b","a","test"]"#;
        let compressed = compress_block(data, Codec::Gzip).unwrap();

        let mut decoder = flate2::read::GzDecoder::new(&compressed[..]);
        let mut restored = Vec::new();
        decoder.read_to_end(&mut restored).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn brotli_round_trip() {
        let data = br#"["b","a","test"]"#;
        let compressed = compress_block(data, Codec::Brotli).unwrap();

        let mut restored = Vec::new();
        brotli::BrotliDecompress(&mut &compressed[..], &mut restored).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn compression_shrinks_repetitive_input() {
        let words: Vec<String> = (0..500).map(|i| format!("word{}", i % 10)).collect();
        let data = serde_json::to_vec(&words).unwrap();

        for codec in Codec::ALL {
            let compressed = compress_block(&data, codec).unwrap();
            assert!(compressed.len() < data.len(), "{} did not shrink", codec.name());
        }
    }

    #[test]
    fn artifact_paths_append_extension() {
        let input = Path::new("data/words.json");
        assert_eq!(
            artifact_path(input, Codec::Gzip),
            PathBuf::from("data/words.json.gz")
        );
        assert_eq!(
            artifact_path(input, Codec::Brotli),
            PathBuf::from("data/words.json.br")
        );
    }

    #[test]
    fn compress_file_writes_siblings() {
        let path = std::env::temp_dir().join(format!("spellbee-compress-{}.json", std::process::id()));
        fs::write(&path, br#"["one","two","three"]"#).unwrap();

        let artifacts = compress_file(&path, &[Codec::Gzip]).unwrap();

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, PathBuf::from(format!("{}.gz", path.display())));
        assert_eq!(artifacts[0].bytes, fs::metadata(&artifacts[0].path).unwrap().len());

        fs::remove_file(&artifacts[0].path).unwrap();
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn compress_missing_file_is_an_error() {
        let missing = Path::new("definitely/not/here.json");
        assert!(compress_file(missing, &Codec::ALL).is_err());
    }
}
