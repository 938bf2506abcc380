use proximaml::{
    algorithms::KnnClassifier,
    ndarray::{array, Array2},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let x_data =
        Array2::from_shape_vec((4, 2), vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 6.0, 5.0])?;
    let y_data = vec!["ruby", "ruby", "amber", "amber"];

    let mut model = KnnClassifier::new().k(3).normalize(false).build();
    model.fit(&x_data, &y_data)?;

    let label = model.classify(array![1.5, 2.5].view())?;
    println!("Predicted label for [1.5, 2.5]: {}", label);

    let new_data = Array2::from_shape_vec((2, 2), vec![1.5, 2.5, 5.0, 4.5])?;
    let predictions = model.predict(&new_data)?;
    println!("Predictions for new data: {:?}", predictions);

    Ok(())
}
