use crate::error::FlamethrowerError;
use crate::protocol::Protocol;

/// Per-test values of the three protocols, aligned by test index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtocolSeries<'a> {
    pub udp: &'a [f64],
    pub https_get: &'a [f64],
    pub https_post: &'a [f64],
}

impl<'a> ProtocolSeries<'a> {
    pub fn new(udp: &'a [f64], https_get: &'a [f64], https_post: &'a [f64]) -> Self {
        Self {
            udp,
            https_get,
            https_post,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Protocol, &'a [f64])> {
        [
            (Protocol::Udp, self.udp),
            (Protocol::HttpsGet, self.https_get),
            (Protocol::HttpsPost, self.https_post),
        ]
        .into_iter()
    }

    /// Number of tests, provided every series has one value per test.
    pub fn tests(&self) -> Result<usize, FlamethrowerError> {
        let expected = self.udp.len();
        for (protocol, values) in self.iter() {
            if values.len() != expected {
                return Err(FlamethrowerError::MisalignedSeries {
                    name: protocol.to_string(),
                    expected,
                    actual: values.len(),
                });
            }
        }
        Ok(expected)
    }

    /// HTTPS GET and HTTPS POST values minus the UDP value of the same test.
    pub fn differences(&self) -> Result<[(Protocol, Vec<f64>); 2], FlamethrowerError> {
        self.tests()?;
        let minus_udp = |values: &[f64]| -> Vec<f64> {
            values
                .iter()
                .zip(self.udp)
                .map(|(https, udp)| https - udp)
                .collect()
        };
        Ok([
            (Protocol::HttpsGet, minus_udp(self.https_get)),
            (Protocol::HttpsPost, minus_udp(self.https_post)),
        ])
    }
}
