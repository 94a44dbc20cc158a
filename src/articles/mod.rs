//! The hard-coded article set. Each article lives in its own module with a
//! `metadata()` constructor and a markdown `BODY`; [`registry`] pairs them
//! with their [`Content`] variants in display order. To publish a new
//! article, add a module here, a [`Content`] variant, and an entry to the
//! list in [`registry`].

pub mod managing_state_laravel_angular;
pub mod stripe_angular_laravel_payments;

use crate::article::Entry;
use crate::content::Content;
use crate::registry::{Registry, Result};

/// Builds the canonical registry. Insertion order is display order: the
/// first entry is the one the listing page features.
pub fn registry() -> Result<Registry> {
    Registry::new(vec![
        Entry {
            metadata: managing_state_laravel_angular::metadata(),
            content: Content::ManagingStateLaravelAngular,
        },
        Entry {
            metadata: stripe_angular_laravel_payments::metadata(),
            content: Content::StripeAngularLaravelPayments,
        },
    ])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::search;

    #[test]
    fn test_canonical_registry_builds() {
        let registry = registry().expect("canonical registry must be valid");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_first_entry_is_the_featured_article() {
        let registry = registry().unwrap();
        let first = registry.metadata().next().unwrap();
        assert_eq!(first.id, "managing-state-laravel-angular");
    }

    #[test]
    fn test_every_entry_resolves_by_its_own_id() {
        let registry = registry().unwrap();
        let ids: Vec<String> =
            registry.metadata().map(|m| m.id.clone()).collect();
        for id in ids {
            let entry = registry
                .lookup_by_id(&id)
                .unwrap_or_else(|| panic!("id `{}` did not resolve", id));
            assert_eq!(entry.metadata.id, id);
        }
    }

    #[test]
    fn test_metadata_matches_its_content_variant() {
        let registry = registry().unwrap();
        let entry = registry.lookup_by_id("stripe-angular-laravel-payments").unwrap();
        assert_eq!(entry.content, Content::StripeAngularLaravelPayments);
    }

    #[test]
    fn test_the_shipped_articles_are_searchable() {
        let registry = registry().unwrap();

        let stripe = search::filter(registry.metadata(), "stripe");
        assert_eq!(stripe.len(), 1);
        assert_eq!(stripe[0].id, "stripe-angular-laravel-payments");

        let angular = search::filter(registry.metadata(), "angular");
        let ids: Vec<&str> = angular.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "managing-state-laravel-angular",
                "stripe-angular-laravel-payments",
            ]
        );
    }
}
