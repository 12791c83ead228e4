//! Customer and time window types.

/// A service time window at a customer location.
///
/// Under hard semantics the vehicle may arrive as early as `ready` (waiting
/// until then) but no later than `due`. Under soft semantics arrivals outside
/// the window are penalized instead of rejected.
///
/// # Examples
///
/// ```
/// use vrptw_anneal::models::TimeWindow;
///
/// let tw = TimeWindow::new(100.0, 200.0).unwrap();
/// assert!(tw.contains(150.0));
/// assert!(tw.is_violated(250.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    ready: f64,
    due: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if `ready > due` or either value is non-finite.
    pub fn new(ready: f64, due: f64) -> Option<Self> {
        if !ready.is_finite() || !due.is_finite() || ready > due {
            return None;
        }
        Some(Self { ready, due })
    }

    /// A window covering the whole planning horizon, as carried by the depot.
    pub fn full_horizon() -> Self {
        Self {
            ready: 0.0,
            due: f64::MAX,
        }
    }

    /// Earliest allowable arrival time.
    pub fn ready(&self) -> f64 {
        self.ready
    }

    /// Latest allowable arrival time.
    pub fn due(&self) -> f64 {
        self.due
    }

    /// Returns `true` if the given time falls within this window.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.ready && time <= self.due
    }

    /// Returns `true` if arriving at the given time violates this window.
    pub fn is_violated(&self, arrival: f64) -> bool {
        arrival > self.due
    }
}

/// A customer (or depot) in a routing instance.
///
/// Customer 0 is the depot. Every customer carries a location, a demand,
/// a time window, and a service duration; the depot has zero demand and a
/// full-horizon window.
///
/// # Examples
///
/// ```
/// use vrptw_anneal::models::{Customer, TimeWindow};
///
/// let depot = Customer::depot(35.0, 35.0);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.demand(), 0);
///
/// let tw = TimeWindow::new(0.0, 100.0).unwrap();
/// let c = Customer::new(1, 41.0, 49.0, 10, 10.0, tw);
/// assert_eq!(c.demand(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Customer {
    id: usize,
    x: f64,
    y: f64,
    demand: i32,
    service_duration: f64,
    time_window: TimeWindow,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(
        id: usize,
        x: f64,
        y: f64,
        demand: i32,
        service_duration: f64,
        time_window: TimeWindow,
    ) -> Self {
        Self {
            id,
            x,
            y,
            demand,
            service_duration,
            time_window,
        }
    }

    /// Creates a depot at the given coordinates (id 0, demand 0,
    /// full-horizon window).
    pub fn depot(x: f64, y: f64) -> Self {
        Self::new(0, x, y, 0, 0.0, TimeWindow::full_horizon())
    }

    /// Customer ID (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Demand at this customer.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Service duration at this customer.
    pub fn service_duration(&self) -> f64 {
        self.service_duration
    }

    /// Time window constraint.
    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }

    /// Euclidean distance to another customer.
    pub fn distance_to(&self, other: &Customer) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window_valid() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert_eq!(tw.ready(), 10.0);
        assert_eq!(tw.due(), 20.0);
    }

    #[test]
    fn test_time_window_invalid() {
        assert!(TimeWindow::new(20.0, 10.0).is_none());
        assert!(TimeWindow::new(f64::NAN, 10.0).is_none());
        assert!(TimeWindow::new(10.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_time_window_contains() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert!(tw.contains(10.0));
        assert!(tw.contains(20.0));
        assert!(!tw.contains(9.9));
        assert!(!tw.contains(20.1));
    }

    #[test]
    fn test_time_window_violated() {
        let tw = TimeWindow::new(10.0, 20.0).expect("valid");
        assert!(!tw.is_violated(20.0));
        assert!(tw.is_violated(20.1));
    }

    #[test]
    fn test_full_horizon_window() {
        let tw = TimeWindow::full_horizon();
        assert_eq!(tw.ready(), 0.0);
        assert!(!tw.is_violated(1e12));
    }

    #[test]
    fn test_customer_depot() {
        let d = Customer::depot(35.0, 35.0);
        assert_eq!(d.id(), 0);
        assert_eq!(d.demand(), 0);
        assert_eq!(d.service_duration(), 0.0);
    }

    #[test]
    fn test_customer_distance() {
        let a = Customer::depot(0.0, 0.0);
        let tw = TimeWindow::full_horizon();
        let b = Customer::new(1, 3.0, 4.0, 0, 0.0, tw);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }
}
