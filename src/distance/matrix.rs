//! Dense distance matrix.

use crate::models::Customer;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Derived once from instance coordinates and read-only thereafter.
/// Invariant: symmetric with a zero diagonal.
///
/// # Examples
///
/// ```
/// use vrptw_anneal::models::Customer;
/// use vrptw_anneal::distance::DistanceMatrix;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::depot(3.0, 4.0),
/// ];
/// let dm = DistanceMatrix::from_customers(&customers);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a zero matrix of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Euclidean distance matrix from customer coordinates.
    ///
    /// O(n²) time and space.
    pub fn from_customers(customers: &[Customer]) -> Self {
        let n = customers.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = customers[i].distance_to(&customers[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeWindow;
    use proptest::prelude::*;

    fn sample_customers() -> Vec<Customer> {
        let tw = TimeWindow::full_horizon();
        vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 3.0, 4.0, 10, 5.0, tw),
            Customer::new(2, 0.0, 8.0, 20, 5.0, tw),
        ]
    }

    #[test]
    fn test_from_customers() {
        let dm = DistanceMatrix::from_customers(&sample_customers());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!(dm.get(0, 0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric_zero_diagonal() {
        let dm = DistanceMatrix::from_customers(&sample_customers());
        assert!(dm.is_symmetric(1e-10));
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_matrix_symmetric(points in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 2..12)) {
            let customers: Vec<Customer> = points
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| {
                    if i == 0 {
                        Customer::depot(x, y)
                    } else {
                        Customer::new(i, x, y, 1, 0.0, TimeWindow::full_horizon())
                    }
                })
                .collect();
            let dm = DistanceMatrix::from_customers(&customers);
            prop_assert!(dm.is_symmetric(1e-9));
            for i in 0..dm.size() {
                prop_assert!(dm.get(i, i).abs() < 1e-12);
            }
        }
    }
}
