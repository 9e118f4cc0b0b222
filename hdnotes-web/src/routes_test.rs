//! Tests for the routing system
//!
//! Validates route definitions and path mappings for the client's
//! registration, sign-in, dashboard and not-found views.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use yew_router::Routable;

    /// Tests route enum variants
    #[test]
    fn test_route_variants() {
        let sign_up = MainRoute::SignUp;
        let sign_in = MainRoute::SignIn;
        let dashboard = MainRoute::Dashboard;
        let not_found = MainRoute::NotFound;

        // Test Debug trait
        assert!(format!("{sign_up:?}").contains("SignUp"));
        assert!(format!("{sign_in:?}").contains("SignIn"));
        assert!(format!("{dashboard:?}").contains("Dashboard"));
        assert!(format!("{not_found:?}").contains("NotFound"));
    }

    /// Tests route equality and cloning
    #[test]
    fn test_route_equality() {
        assert_eq!(MainRoute::Dashboard, MainRoute::Dashboard.clone());
        assert_ne!(MainRoute::SignUp, MainRoute::SignIn);
    }

    /// Tests route-to-path mappings
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::SignUp.to_path(), "/");
        assert_eq!(MainRoute::SignIn.to_path(), "/sign-in");
        assert_eq!(MainRoute::Dashboard.to_path(), "/dashboard");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    /// Tests path recognition, including the catch-all
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::SignUp));
        assert_eq!(MainRoute::recognize("/sign-in"), Some(MainRoute::SignIn));
        assert_eq!(
            MainRoute::recognize("/dashboard"),
            Some(MainRoute::Dashboard)
        );
        assert_eq!(
            MainRoute::recognize("/definitely-not-a-route"),
            Some(MainRoute::NotFound)
        );
    }
}
