// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Sender};
use std::thread::{self, JoinHandle};

use csv::ReaderBuilder;
use log::{debug, error, info};
use rand::seq::SliceRandom;
use reqwest::blocking::get;

/// One labeled sample: feature values in column order plus its class target.
type Row = (Vec<f64>, u8);

/// Configuration for CSV dataset processing
#[derive(Debug)]
pub struct CsvDatasetConfig {
    url: String,
    has_headers: bool,
    feature_cols: Option<Vec<usize>>,
    target_col: usize,
    train_ratio: f64,
    output_dir: PathBuf,
    target_mapping: Option<fn(&str) -> Result<u8, Box<dyn Error + Send + Sync + 'static>>>,
    num_threads: usize,
}

impl CsvDatasetConfig {
    pub fn new(url: &str, has_headers: bool, target_col: usize) -> Self {
        CsvDatasetConfig {
            url: url.to_string(),
            has_headers,
            feature_cols: None,
            target_col,
            train_ratio: 0.7,
            output_dir: PathBuf::from("."),
            target_mapping: None,
            num_threads: thread::available_parallelism().map(|n| n.get()).unwrap_or(4),
        }
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Restricts features to the given source columns. The default uses
    /// every column except the target.
    pub fn with_feature_cols(mut self, cols: Vec<usize>) -> Self {
        self.feature_cols = Some(cols);
        self
    }

    pub fn with_train_ratio(mut self, ratio: f64) -> Self {
        self.train_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_target_mapping(
        mut self,
        mapping: fn(&str) -> Result<u8, Box<dyn Error + Send + Sync + 'static>>,
    ) -> Self {
        self.target_mapping = Some(mapping);
        self
    }

    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads.max(1);
        self
    }
}

fn format_row(features: &[f64], target: u8) -> String {
    let mut line =
        features.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
    line.push(',');
    line.push_str(&target.to_string());
    line
}

fn spawn_writer_thread(
    train_path: PathBuf,
    test_path: PathBuf,
    rx: std::sync::mpsc::Receiver<(Row, bool)>,
) -> JoinHandle<Result<(), Box<dyn Error + Send + Sync + 'static>>> {
    debug!("Spawning writer thread for paths: {:?}, {:?}", train_path, test_path);
    thread::spawn(move || match File::create(&train_path) {
        Ok(train_file) => match File::create(&test_path) {
            Ok(test_file) => {
                let mut train_writer = BufWriter::new(train_file);
                let mut test_writer = BufWriter::new(test_file);

                while let Ok(((features, target), is_train)) = rx.recv() {
                    let writer = if is_train { &mut train_writer } else { &mut test_writer };
                    if let Err(e) = writeln!(writer, "{}", format_row(&features, target)) {
                        error!("Failed to write to file: {:?}", e);
                        return Err(Box::new(e) as Box<dyn Error + Send + Sync + 'static>);
                    }
                }
                train_writer.flush()?;
                test_writer.flush()?;
                Ok(())
            }
            Err(e) => {
                error!("Failed to create test file {:?}: {:?}", test_path, e);
                Err(Box::new(e) as Box<dyn Error + Send + Sync + 'static>)
            }
        },
        Err(e) => {
            error!("Failed to create train file {:?}: {:?}", train_path, e);
            Err(Box::new(e) as Box<dyn Error + Send + Sync + 'static>)
        }
    })
}

fn process_csv_chunk(data: Vec<Row>, tx: Sender<(Row, bool)>, is_train: bool) -> JoinHandle<()> {
    thread::spawn(move || {
        for row in data {
            if let Err(e) = tx.send((row, is_train)) {
                error!("Failed to send data to writer: {:?}", e);
                return;
            }
        }
    })
}

/// Parses downloaded CSV text into labeled rows per the config's column
/// selection.
fn parse_rows(
    text: &str,
    config: &CsvDatasetConfig,
) -> Result<Vec<Row>, Box<dyn Error + Send + Sync + 'static>> {
    let mut rdr = ReaderBuilder::new().has_headers(config.has_headers).from_reader(text.as_bytes());
    let mut rows: Vec<Row> = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            error!("Failed to read CSV record at row {}: {:?}", i, e);
            Box::new(e) as Box<dyn Error + Send + Sync + 'static>
        })?;

        let feature_cols: Vec<usize> = match &config.feature_cols {
            Some(cols) => cols.clone(),
            None => (0..record.len()).filter(|&c| c != config.target_col).collect(),
        };

        let mut features = Vec::with_capacity(feature_cols.len());
        for col in feature_cols {
            match record[col].parse::<f64>() {
                Ok(value) => features.push(value),
                Err(e) => {
                    error!("Failed to parse feature column {} in row {}: {:?}", col, i, e);
                    return Err(Box::new(e));
                }
            }
        }

        let target = if let Some(mapping) = config.target_mapping {
            mapping(&record[config.target_col])?
        } else {
            record[config.target_col].parse()?
        };
        rows.push((features, target));
    }
    Ok(rows)
}

/// Shuffles rows and splits them at the configured train ratio.
fn shuffle_split(mut rows: Vec<Row>, train_ratio: f64) -> (Vec<Row>, Vec<Row>) {
    let mut rng = rand::thread_rng();
    rows.shuffle(&mut rng);
    let train_size = (rows.len() as f64 * train_ratio).round() as usize;
    let test_data = rows.split_off(train_size.min(rows.len()));
    (rows, test_data)
}

/// Process a CSV dataset with multithreading
///
/// Downloads the configured CSV, shuffles and splits it, and writes
/// `train_data.csv` / `test_data.csv` (features first, target last) into the
/// output directory.
///
/// # Returns
/// The `(train, test)` row counts.
pub fn process_csv_dataset(
    config: CsvDatasetConfig,
) -> Result<(usize, usize), Box<dyn Error + Send + Sync + 'static>> {
    info!("Starting CSV dataset processing with config: {:?}", config);

    // Ensure output directory exists
    fs::create_dir_all(&config.output_dir)?;

    // Download data
    debug!("Downloading data from {}", config.url);
    let response = get(&config.url)?;
    let text = response.text()?;

    let rows = parse_rows(&text, &config)?;
    debug!("Parsed {} rows", rows.len());

    let total_rows = rows.len();
    let (train_data, test_data) = shuffle_split(rows, config.train_ratio);
    let train_size = train_data.len();
    debug!("Split data: train_size={}, test_size={}", train_size, test_data.len());

    // Create channel and spawn threads
    let (tx, rx) = channel();
    let train_path = config.output_dir.join("train_data.csv");
    let test_path = config.output_dir.join("test_data.csv");
    let writer_handle = spawn_writer_thread(train_path, test_path, rx);

    let chunk_size = (total_rows / config.num_threads).max(1);
    let mut handles = Vec::new();

    for chunk in train_data.chunks(chunk_size) {
        let tx = tx.clone();
        let chunk = chunk.to_vec();
        handles.push(process_csv_chunk(chunk, tx, true));
    }

    for chunk in test_data.chunks(chunk_size) {
        let tx = tx.clone();
        let chunk = chunk.to_vec();
        handles.push(process_csv_chunk(chunk, tx, false));
    }

    drop(tx);

    // Wait for threads to complete
    for (i, handle) in handles.into_iter().enumerate() {
        if let Err(e) = handle.join() {
            error!("Processing thread {} panicked: {:?}", i, e);
        }
    }

    match writer_handle.join() {
        Ok(result) => result?,
        Err(e) => {
            error!("Writer thread panicked: {:?}", e);
            return Err("Writer thread panicked".into());
        }
    }

    info!("CSV dataset processing completed successfully");
    Ok((train_size, total_rows - train_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_target_first_column() {
        let config = CsvDatasetConfig::new("http://unused.invalid/wine.data", false, 0);
        let text = "1,14.23,1.71\n2,13.2,1.78\n3,12.37,0.94\n";
        let rows = parse_rows(text, &config).expect("Failed to parse rows");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], (vec![14.23, 1.71], 1));
        assert_eq!(rows[2], (vec![12.37, 0.94], 3));
    }

    #[test]
    fn test_parse_rows_with_mapping_and_feature_cols() {
        fn mapping(value: &str) -> Result<u8, Box<dyn Error + Send + Sync + 'static>> {
            match value {
                "red" => Ok(0),
                "white" => Ok(1),
                _ => Err("Invalid wine color".into()),
            }
        }

        let config = CsvDatasetConfig::new("http://unused.invalid/wine.csv", false, 0)
            .with_feature_cols(vec![1, 3])
            .with_target_mapping(mapping);
        let text = "red,1.0,9.9,3.0\nwhite,4.0,9.9,6.0\n";
        let rows = parse_rows(text, &config).expect("Failed to parse rows");
        assert_eq!(rows, vec![(vec![1.0, 3.0], 0), (vec![4.0, 6.0], 1)]);
    }

    #[test]
    fn test_parse_rows_invalid_feature() {
        let config = CsvDatasetConfig::new("http://unused.invalid/wine.data", false, 0);
        let text = "1,not_a_number\n";
        assert!(parse_rows(text, &config).is_err());
    }

    #[test]
    fn test_shuffle_split_sizes() {
        let rows: Vec<Row> = (0..10).map(|i| (vec![i as f64], 0)).collect();
        let (train, test) = shuffle_split(rows, 0.7);
        assert_eq!(train.len(), 7);
        assert_eq!(test.len(), 3);
    }

    #[test]
    fn test_shuffle_split_keeps_all_rows() {
        let rows: Vec<Row> = (0..25).map(|i| (vec![i as f64], (i % 3) as u8)).collect();
        let (train, test) = shuffle_split(rows, 0.5);
        let mut seen: Vec<f64> = train.iter().chain(test.iter()).map(|(f, _)| f[0]).collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected: Vec<f64> = (0..25).map(|i| i as f64).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_format_row() {
        assert_eq!(format_row(&[14.23, 1.71], 1), "14.23,1.71,1");
    }

    // Hits the UCI archive; run with `cargo test -- --ignored` when online.
    #[test]
    #[ignore]
    fn test_process_csv_wine() {
        let _ =
            env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();

        info!("Starting test_process_csv_wine");
        let config = CsvDatasetConfig::new(
            "https://archive.ics.uci.edu/ml/machine-learning-databases/wine/wine.data",
            false,
            0,
        )
        .with_output_dir(PathBuf::from("./test_output"))
        .with_threads(2);

        let result = process_csv_dataset(config);
        if let Err(e) = &result {
            error!("Test failed with error: {:?}", e);
        }
        assert!(result.is_ok(), "Process CSV dataset failed: {:?}", result.err());
        let (train_size, test_size) = result.unwrap();
        debug!("Test result: train_size={}, test_size={}", train_size, test_size);
        assert!(train_size > 0, "Train size should be greater than 0");
        assert!(test_size > 0, "Test size should be greater than 0");
        info!("Test completed successfully");
    }
}
