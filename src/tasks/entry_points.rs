/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::cmd;
use crate::ui::logging::GlobalLogger;

use std::ffi::{OsStr, OsString};

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        } else {
            error!("\
                (If you found the above error message to be particularly lacking in \
                detail, try again with RUST_BACKTRACE=1)\
            ");
        }
        std::process::exit(1);
    });
}

/// Parse arguments and run one subcommand, without installing a logger
/// or printing anything.
pub fn run_from_args<I, T>(args: I) -> FailResult<serde_json::Value>
where
    I: IntoIterator<Item=T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd::app().get_matches_from_safe(args)?;
    cmd::run(&matches)
}

pub fn lina() {
    wrap_result_main(|| {
        let matches = cmd::app().get_matches();

        let mut logger = GlobalLogger::default();
        logger.verbosity(matches.occurrences_of("verbose") as i32);
        if let Some(path) = matches.value_of("log") {
            logger.path(path);
        }
        logger.apply()?;

        let output = cmd::run(&matches)?;
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use lina_linalg::{Matrix, Vector};
    use std::io::Write;
    use std::path::PathBuf;
    use tempdir::TempDir;

    struct Inputs(TempDir);

    impl Inputs {
        fn new() -> Self { Inputs(TempDir::new("lina-cli").unwrap()) }

        fn file(&self, name: &str, text: &str) -> String {
            let path: PathBuf = self.0.path().join(name);
            std::fs::File::create(&path).unwrap().write_all(text.as_bytes()).unwrap();
            path.to_str().unwrap().to_owned()
        }
    }

    fn run(args: &[&str]) -> FailResult<serde_json::Value> {
        run_from_args(std::iter::once("lina").chain(args.iter().cloned()))
    }

    #[test]
    fn det() {
        let inputs = Inputs::new();
        let m = inputs.file("m.yaml", "[[1, 2, 3], [4, 5, 6], [7, 8, 9]]");
        assert_eq!(run(&["det", &m]).unwrap(), json!({ "determinant": 0.0 }));

        let m = inputs.file("m2.yaml", "- [2, 0]\n- [0, 3]\n");
        assert_eq!(run(&["det", &m]).unwrap(), json!({ "determinant": 6.0 }));
    }

    #[test]
    fn det_of_non_square_fails() {
        let inputs = Inputs::new();
        let m = inputs.file("m.yaml", "[[1, 2]]");
        let err = run(&["det", &m]).unwrap_err();
        assert!(err.to_string().contains("non-square"), "{}", err);
    }

    #[test]
    fn eps_changes_null_test() {
        let inputs = Inputs::new();
        let m = inputs.file("m.yaml", "[[1.0e-8, 1.0e-8, 1.0e-8], [1, 2, 3], [4, 5, 7]]");
        assert_eq!(run(&["det", &m]).unwrap(), json!({ "determinant": 0.0 }));

        let det = run(&["--eps", "0", "det", &m]).unwrap()["determinant"].as_f64().unwrap();
        assert!((det - 1e-8).abs() < 1e-12, "{}", det);

        let config = inputs.file("config.yaml", "tolerance: {eps: 0}");
        let det = run(&["--config", &config, "det", &m]).unwrap()["determinant"].as_f64().unwrap();
        assert!((det - 1e-8).abs() < 1e-12, "{}", det);

        // the flag wins over the file
        let det = run(&["--config", &config, "--eps", "1e-6", "det", &m]).unwrap()["determinant"].as_f64().unwrap();
        assert_eq!(det, 0.0);
    }

    #[test]
    fn bad_eps() {
        assert!(run(&["--eps", "-1", "centroid", "--dim", "3"]).is_err());
        assert!(run(&["--eps", "tiny", "centroid", "--dim", "3"]).is_err());
    }

    #[test]
    fn add_and_mul() {
        let inputs = Inputs::new();
        let a = inputs.file("a.yaml", "[[1, 2], [3, 4]]");
        let b = inputs.file("b.yaml", "[[0, 1], [1, 0]]");
        let v = inputs.file("v.yaml", "[1, -1]");

        let sum: Matrix = serde_json::from_value(run(&["add", &a, &b]).unwrap()).unwrap();
        assert_eq!(sum.to_rows(), vec![vec![1.0, 3.0], vec![4.0, 4.0]]);

        let product: Matrix = serde_json::from_value(run(&["mul", &a, &b]).unwrap()).unwrap();
        assert_eq!(product.to_rows(), vec![vec![2.0, 1.0], vec![4.0, 3.0]]);

        let product: Vector = serde_json::from_value(run(&["mul", "--vector", &a, &v]).unwrap()).unwrap();
        assert_eq!(product.as_slice(), &[-1.0, -1.0]);

        let wide = inputs.file("wide.yaml", "[[1, 2, 3]]");
        assert!(run(&["add", &a, &wide]).is_err());
        let tall = inputs.file("tall.yaml", "[[1], [2]]");
        assert_eq!(run(&["mul", &a, &tall]).unwrap(), json!([[5.0], [11.0]]));
        assert!(run(&["mul", &tall, &a]).is_err());
        assert!(run(&["mul", "--vector", &a, &a]).is_err());
    }

    #[test]
    fn submatrix() {
        let inputs = Inputs::new();
        let m = inputs.file("m.yaml", "[[1, 2, 3], [4, 5, 6], [7, 8, 9]]");
        let out = run(&["submatrix", &m, "--row", "1", "--col", "2"]).unwrap();
        assert_eq!(out, json!([[1.0, 2.0], [7.0, 8.0]]));

        assert!(run(&["submatrix", &m, "--row", "3", "--col", "0"]).is_err());
        assert!(run(&["submatrix", &m, "--row", "-1", "--col", "0"]).is_err());
    }

    #[test]
    fn normalize() {
        let inputs = Inputs::new();
        let v = inputs.file("v.yaml", "[3, 0, 4]");
        let out = run(&["normalize", &v]).unwrap();
        assert_eq!(out["length"], json!(5.0));
        let unit: Vector = serde_json::from_value(out["vector"].clone()).unwrap();
        assert_eq!(unit, Vector::new(vec![0.6, 0.0, 0.8]));

        let zero = inputs.file("zero.yaml", "[0, 0, 0]");
        let out = run(&["normalize", &zero]).unwrap();
        assert_eq!(out, json!({ "vector": [0.0, 0.0, 0.0], "length": 0.0 }));
    }

    #[test]
    fn centroid() {
        let out = run(&["centroid", "--dim", "4"]).unwrap();
        assert_eq!(out, json!({ "dim": 4, "centroid": [0.25, 0.25, 0.25, 0.25] }));
        assert!(run(&["centroid", "--dim", "1"]).is_err());
    }

    #[test]
    fn missing_subcommand_is_a_clap_error() {
        assert!(run(&[]).is_err());
    }
}
