pub trait GeoCodingGateway {
    /// Resolve a free-text address into `(latitude, longitude)` in degrees.
    ///
    /// Ordinary failures like network errors, empty results or
    /// malformed responses are reported as `None`.
    fn resolve_address_lat_lng(&self, query: &str) -> Option<(f64, f64)>;
}
