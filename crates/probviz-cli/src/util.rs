use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use probviz_sampling::{SampleSeed, SeededSource};

/// Where a command writes its JSON document.
#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match output_path {
            Some(path) => Output::create(path)?,
            None => Output::Stdout {
                writer: io::stdout().lock(),
            },
        };
        output.write_json(value)?;
        if let Output::File { path, .. } = &output {
            tracing::info!(path = %path.display(), "wrote report");
        }
        Ok(())
    }

    fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self)
            .and_then(|()| self.flush())
            .with_context(|| format!("Failed to finish output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Uses `seed` if given, a fresh random seed otherwise.
///
/// The seed is logged so that any run can be repeated with `--seed`.
pub fn seeded_source(seed: Option<SampleSeed>) -> (SampleSeed, SeededSource) {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(%seed, "seeded sample source");
    (seed, seed.source())
}

/// Clamps a command-line value into `[min, max]`, warning when it moves.
pub fn clamp_arg<T>(name: &str, value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };
    if clamped != value {
        tracing::warn!("{name} {value} is out of range, using {clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_arg() {
        assert_eq!(clamp_arg("n", 0_u32, 1, 10_000), 1);
        assert_eq!(clamp_arg("n", 20_000_u32, 1, 10_000), 10_000);
        assert_eq!(clamp_arg("sigma", 2.5, 0.1, 1000.0), 2.5);
        assert_eq!(clamp_arg("alpha", 0.5, 1.0, 99.0), 1.0);
    }

    #[test]
    fn test_explicit_seed_is_kept() {
        let seed = SampleSeed::from(7);
        let (used, _) = seeded_source(Some(seed));
        assert_eq!(used, seed);
    }
}
