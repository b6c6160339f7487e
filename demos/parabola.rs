use polint::{lagrange_interpolate, neville_interpolate, Error};

fn main() {
    // samples of y = x², interpolated at x = 2.5 (exact value: 6.25)
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [1.0, 4.0, 9.0, 16.0];
    let x_eval = 2.5;

    let results = [
        ("Lagrange", lagrange_interpolate(&x, &y, x_eval)),
        ("Neville", neville_interpolate(&x, &y, x_eval)),
    ];

    for (method, result) in results {
        match result {
            Ok(value) => {
                println!("{} interpolation at x = {}: y ≈ {:.4}", method, x_eval, value);
            }
            Err(error @ (Error::LengthMismatch { .. } | Error::InsufficientData { .. })) => {
                eprintln!("invalid samples: {}", error);
            }
            Err(error @ Error::DuplicateXValues { .. }) => {
                eprintln!("math error: {}", error);
            }
            Err(error) => {
                eprintln!("unexpected error: {}", error);
            }
        }
    }
}
