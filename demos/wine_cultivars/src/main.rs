use std::path::{Path, PathBuf};

use proximaml::{
    algorithms::KnnClassifier,
    data::{
        load_data,
        processors::{process_csv_dataset, CsvDatasetConfig},
        CsvLoader,
    },
    scalers::StandardScaler,
};

const WINE_URL: &str =
    "https://archive.ics.uci.edu/ml/machine-learning-databases/wine/wine.data";

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    // Download and split the UCI wine dataset on first run. The source file
    // has the cultivar class in column 0 and 13 chemistry features after it.
    if !Path::new("train_data.csv").exists() || !Path::new("test_data.csv").exists() {
        let config = CsvDatasetConfig::new(WINE_URL, false, 0)
            .with_train_ratio(0.7)
            .with_output_dir(PathBuf::from("."));
        let (train_rows, test_rows) = process_csv_dataset(config)?;
        println!("Prepared wine dataset: {} train rows, {} test rows", train_rows, test_rows);
    }

    let (x_train, y_train) = load_data::<CsvLoader, _>("train_data.csv")?;
    let (x_test, y_test) = load_data::<CsvLoader, _>("test_data.csv")?;

    let y_train: Vec<u8> = y_train.iter().map(|&v| v as u8).collect();
    let y_test: Vec<u8> = y_test.iter().map(|&v| v as u8).collect();

    // Standardize features: the wine columns span very different ranges, and
    // unscaled magnesium would dominate every distance.
    let mut model = KnnClassifier::new()
        .k(5)
        .scaler(StandardScaler::new())
        .normalize(true)
        .build();

    model.fit(&x_train, &y_train)?;

    let predictions = model.predict(&x_test)?;
    println!("Predicted cultivars: {:?}", predictions);

    let accuracy = model.calculate_accuracy(&y_test, &predictions)?;
    println!("Test Accuracy: {:.6}", accuracy);

    Ok(())
}
