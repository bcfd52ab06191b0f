use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

fn squash_standard_io(path: Option<&str>) -> Option<&str> {
    path.filter(|p| *p != "-")
}

/// Open a reader for a path; `None` or "-" reads stdin.
pub fn open_reader(path: Option<&str>) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
    Ok(match squash_standard_io(path) {
        None => Box::new(BufReader::new(std::io::stdin().lock())),
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
    })
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        open_reader(self.input.as_deref())
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(self.output.as_deref()) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(None), None);
        assert_eq!(squash_standard_io(Some("-")), None);
        assert_eq!(squash_standard_io(Some("vocab.txt")), Some("vocab.txt"));
    }
}
