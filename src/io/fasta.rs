use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Result, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Open a FASTA file for reading, handles gzipped files automatically
pub fn open_fasta(path: &str) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read every sequence from a FASTA file, in file order. Multi-line
/// records are concatenated; headers are discarded.
pub fn read_fasta_sequences(path: &str) -> Result<Vec<String>> {
    let reader = open_fasta(path)?;
    let mut sequences = Vec::new();
    let mut current = String::new();
    let mut in_record = false;

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            if in_record {
                sequences.push(std::mem::take(&mut current));
            }
            in_record = true;
        } else if in_record {
            current.push_str(line.trim());
        }
    }
    if in_record {
        sequences.push(current);
    }

    Ok(sequences)
}

pub enum FastaWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl FastaWriter {
    /// Create a FASTA writer, gzip-compressed when the path ends in .gz
    pub fn new(path: &str) -> Result<Self> {
        let file = File::create(path)?;
        if path.ends_with(".gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastaWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    pub fn write_record(&mut self, header: &str, sequence: &str) -> Result<()> {
        match self {
            FastaWriter::Plain(writer) => {
                writeln!(writer, ">{}", header)?;
                writeln!(writer, "{}", sequence)?;
            }
            FastaWriter::Compressed(writer) => {
                writeln!(writer, ">{}", header)?;
                writeln!(writer, "{}", sequence)?;
            }
        };
        Ok(())
    }

    pub fn finish(self) -> Result<()> {
        match self {
            FastaWriter::Plain(mut writer) => writer.flush(),
            FastaWriter::Compressed(mut writer) => {
                writer.flush()?;
                writer.into_inner().map_err(|e| e.into_error())?.finish()?;
                Ok(())
            }
        }
    }
}
