use std::path::Path;

use super::sample_struct::Sample;
use crate::error::{GentleBoostError, Result};


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file to [`Sample`].
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use gentleboost::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the class label.
    /// Labels are arbitrary real numbers standing for class ids.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments.
    /// This method consumes `self.`
    /// Without a target column the returned sample has no label,
    /// which is enough for prediction.
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or(GentleBoostError::MissingFile)?;

        let sample = Sample::from_csv(file.as_ref(), self.has_header)?;
        match self.target {
            Some(target) => sample.set_target(target.as_ref()),
            None => Ok(sample),
        }
    }
}
