use join_string::Join;
use meshgrid::{Mesh, MeshOptions, Number};
use rand::{Rng, RngCore, SeedableRng};

// two noisy clusters labelled -1 and 1
#[allow(non_snake_case)]
fn make_blobs(n_samples: usize, noise: Number, rng: &mut impl RngCore) -> (Vec<[Number; 2]>, Vec<Number>) {
    let mut X = Vec::with_capacity(n_samples);
    let mut y = Vec::with_capacity(n_samples);

    for index in 0..n_samples {
        let (center, label) = if index % 2 == 0 { ([-1.0, -0.5], -1.0) } else { ([1.0, 0.5], 1.0) };
        X.push([
            center[0] + rng.gen_range(-noise..noise),
            center[1] + rng.gen_range(-noise..noise),
        ]);
        y.push(label);
    }

    (X, y)
}

#[inline]
fn score(x: Number, y: Number) -> Number {
    0.8 * x + 0.6 * y
}

#[allow(non_snake_case)]
fn main() {
    env_logger::init();

    let json = std::env::args().any(|arg| arg == "--json");

    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let (X, y) = make_blobs(100, 0.6, &mut rng);

    // visualize decision boundary
    let options = MeshOptions::default().with_padding(0.5).with_step(0.25);
    let mesh = match Mesh::from_rows(&X[..], &options) {
        Ok(mesh) => mesh,
        Err(err) => {
            eprintln!("building mesh failed: {err}");
            std::process::exit(1);
        }
    };

    let Z = mesh.evaluate(|x, y| (score(x, y) > 0.0) as u32 as Number);

    if json {
        let doc = serde_json::json!({
            "X": X,
            "y": y,
            "xx": mesh.xx().to_nested(),
            "yy": mesh.yy().to_nested(),
            "Z": Z.to_nested(),
        });
        println!("{doc}");
        return;
    }

    let (rows, cols) = mesh.shape();
    println!("{} x {} mesh, step {}", rows, cols, options.step);

    // highest y on top
    for row in (0..rows).rev() {
        let line: Vec<_> = (0..cols).map(|col| if Z[(row, col)] > 0.0 { '#' } else { '.' }).collect();
        println!("{}", line.iter().join(""));
    }
}
