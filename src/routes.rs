//! Route table for the lead-capture backend.

/// All routes exposed by the application.
pub const ROUTES: &[(&str, &str, &str)] = &[
    // Public API
    ("POST", "/calcular", "Quote tax regimes and record the lead"),
    ("GET", "/api/health", "Health check"),
    // Admin API
    ("POST", "/admin/login", "Admin credential check"),
    ("GET", "/admin/dados", "Full lead table dump"),
    ("GET", "/admin/estatisticas", "Aggregate lead statistics"),
    ("POST", "/admin/marcar_contato", "Mark a lead's contact status"),
    // Static assets
    ("GET", "/*", "SPA bundle with index.html fallback"),
];

/// Print all routes
pub fn print_routes() {
    println!("\nSimulador Tributário Routes:");
    println!("{:-<60}", "");
    for (method, path, desc) in ROUTES {
        println!("{:6} {:30} {}", method, path, desc);
    }
    println!();
}
