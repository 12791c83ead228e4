//! Depot-to-depot route representation.

/// An ordered visiting sequence for one vehicle, stored as the full
/// depot-to-depot id sequence `[0, c1, ..., ck, 0]`.
///
/// Feasibility is a derived property recomputed by the evaluator; a route
/// caches nothing.
///
/// # Examples
///
/// ```
/// use vrptw_anneal::models::Route;
///
/// let route = Route::from_interior(&[3, 1, 2]);
/// assert_eq!(route.ids(), &[0, 3, 1, 2, 0]);
/// assert_eq!(route.interior(), &[3, 1, 2]);
/// assert_eq!(route.num_customers(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    ids: Vec<usize>,
}

impl Route {
    /// Wraps a full depot-to-depot id sequence.
    pub fn new(ids: Vec<usize>) -> Self {
        Self { ids }
    }

    /// Builds a route visiting the given interior customers.
    pub fn from_interior(interior: &[usize]) -> Self {
        let mut ids = Vec::with_capacity(interior.len() + 2);
        ids.push(0);
        ids.extend_from_slice(interior);
        ids.push(0);
        Self { ids }
    }

    /// The full id sequence including both depot legs.
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// The interior customer ids (everything between the depot sentinels).
    pub fn interior(&self) -> &[usize] {
        if self.ids.len() <= 2 {
            &[]
        } else {
            &self.ids[1..self.ids.len() - 1]
        }
    }

    /// Number of interior customers.
    pub fn num_customers(&self) -> usize {
        self.interior().len()
    }

    /// Returns `true` if the route serves no customer.
    pub fn is_empty(&self) -> bool {
        self.interior().is_empty()
    }

    /// Returns `true` if the route visits the given customer.
    pub fn contains(&self, customer_id: usize) -> bool {
        self.interior().contains(&customer_id)
    }

    /// Returns `true` if the sequence starts and ends at the depot.
    pub fn is_closed(&self) -> bool {
        self.ids.len() >= 2 && self.ids.first() == Some(&0) && self.ids.last() == Some(&0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::from_interior(&[]);
        assert!(r.is_empty());
        assert_eq!(r.ids(), &[0, 0]);
        assert_eq!(r.num_customers(), 0);
        assert!(r.is_closed());
    }

    #[test]
    fn test_route_interior() {
        let r = Route::from_interior(&[5, 3, 7]);
        assert_eq!(r.interior(), &[5, 3, 7]);
        assert_eq!(r.num_customers(), 3);
        assert!(r.contains(3));
        assert!(!r.contains(4));
        assert!(!r.contains(0));
    }

    #[test]
    fn test_route_new_unclosed() {
        let r = Route::new(vec![0, 1, 2]);
        assert!(!r.is_closed());
    }
}
