//! Regression test parameters and operations

use imgproc_core::Image;
use imgproc_core::color;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "squash")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "squash")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two packed pixels for exact equality
    ///
    /// Failures are reported channel by channel in hex.
    pub fn compare_pixels(&mut self, expected: u32, actual: u32) -> bool {
        self.index += 1;

        if expected != actual {
            let (er, eg, eb, ea) = color::extract_rgba(expected);
            let (ar, ag, ab, aa) = color::extract_rgba(actual);
            let msg = format!(
                "Failure in {}_reg: pixel comparison for index {}\n\
                 expected = {:#010x} (r={:#04x} g={:#04x} b={:#04x} a={:#04x})\n\
                 actual   = {:#010x} (r={:#04x} g={:#04x} b={:#04x} a={:#04x})",
                self.test_name, self.index, expected, er, eg, eb, ea, actual, ar, ag, ab, aa
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two images for exact equality
    ///
    /// # Arguments
    ///
    /// * `expected` - Reference image
    /// * `actual` - Computed image
    ///
    /// # Returns
    ///
    /// `true` if images are identical, `false` otherwise.
    pub fn compare_images(&mut self, expected: &Image, actual: &Image) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - dimension mismatch: \
                 expected {}x{}, got {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            self.fail(msg);
            return false;
        }

        let width = expected.width();
        let mismatch = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(e, a)| e != a);

        if let Some(i) = mismatch {
            let row = i / width as usize;
            let col = i % width as usize;
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - pixel mismatch at \
                 (row {}, col {}): expected {:#010x}, got {:#010x}",
                self.test_name,
                self.index,
                row,
                col,
                expected.data()[i],
                actual.data()[i]
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_pixels() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_pixels(0xCCAABBDD, 0xCCAABBDD));
        assert!(!rp.compare_pixels(0xCCAABBDD, 0xAABBCCDD));
        assert_eq!(rp.index(), 2);
        assert!(rp.failures()[0].contains("0xccaabbdd"));
    }

    #[test]
    fn test_compare_images_reports_first_mismatch() {
        let a = Image::from_pixels(2, 2, vec![1, 2, 3, 4]).unwrap();
        let b = Image::from_pixels(2, 2, vec![1, 2, 3, 5]).unwrap();
        let c = Image::from_pixels(4, 1, vec![1, 2, 3, 4]).unwrap();

        let mut rp = RegParams::new("test");
        assert!(rp.compare_images(&a, &a.deep_clone()));
        assert!(!rp.compare_images(&a, &b));
        assert!(rp.failures()[0].contains("(row 1, col 1)"));
        assert!(!rp.compare_images(&a, &c));
        assert!(rp.failures()[1].contains("dimension mismatch"));
        assert!(!rp.cleanup());
    }
}
