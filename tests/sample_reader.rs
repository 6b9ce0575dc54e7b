use std::env;
use std::fs;

use gentleboost::prelude::*;
use gentleboost::GentleBoostError;

/// Tests for `SampleReader`.
#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn read_train_predict() {
        let mut path = env::temp_dir();
        path.push("gentleboost_sample_reader.csv");
        fs::write(
            &path,
            "a,b,class\n\
             0.1,5.0,0\n\
             0.2,1.0,0\n\
             0.3,4.0,0\n\
             0.7,2.0,1\n\
             0.8,3.0,1\n\
             0.9,6.0,1\n",
        ).unwrap();

        let sample = SampleReader::new()
            .file(&path)
            .has_header(true)
            .target_feature("class")
            .read()
            .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(sample.shape(), (6, 2));
        assert_eq!(sample["b"].vals(), &[5.0, 1.0, 4.0, 2.0, 3.0, 6.0]);

        let model = GentleBoostModel::fit(&sample, 3, &Options::default())
            .unwrap();
        let labels = model.predict(&sample)
            .unwrap()
            .decode(model.labels());
        assert_eq!(labels, sample.target().to_vec());
    }

    #[test]
    fn missing_file() {
        let err = SampleReader::<&str, &str>::new()
            .has_header(true)
            .read()
            .unwrap_err();
        assert!(matches!(err, GentleBoostError::MissingFile));

        let mut path = env::temp_dir();
        path.push("gentleboost_no_such_file.csv");
        let err = SampleReader::new()
            .file(&path)
            .target_feature("class")
            .read()
            .unwrap_err();
        assert!(matches!(err, GentleBoostError::Io(_)));
    }
}
