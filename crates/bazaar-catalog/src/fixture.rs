//! # Catalog Fixture
//!
//! The static dataset the provider answers from: five categories and ten
//! products. Stands in for a real backend; never mutated at runtime.
//!
//! Prices are in cents, so "Smartphone X" at $699.99 is `69_999`.

use bazaar_core::{Category, Product};

/// The full ordered category list.
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Electronics".to_string(),
            image: "https://images.unsplash.com/photo-1550009158-9ebf69173e03?q=80&w=2301&auto=format&fit=crop".to_string(),
        },
        Category {
            id: 2,
            name: "Clothing".to_string(),
            image: "https://images.unsplash.com/photo-1551488831-00ddcb6c6bd3?q=80&w=2940&auto=format&fit=crop".to_string(),
        },
        Category {
            id: 3,
            name: "Books".to_string(),
            image: "https://images.unsplash.com/photo-1495446815901-a7297e633e8d?q=80&w=2940&auto=format&fit=crop".to_string(),
        },
        Category {
            id: 4,
            name: "Home & Garden".to_string(),
            image: "https://images.unsplash.com/photo-1484154218962-a197022b5858?q=80&w=2874&auto=format&fit=crop".to_string(),
        },
        Category {
            id: 5,
            name: "Sports".to_string(),
            image: "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?q=80&w=2940&auto=format&fit=crop".to_string(),
        },
    ]
}

/// The full ordered product list.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Smartphone X".to_string(),
            description: "Latest smartphone with advanced features and high-quality camera.".to_string(),
            price_cents: 69_999,
            image: "https://images.unsplash.com/photo-1592286927505-1def25115d8c?q=80&w=2787&auto=format&fit=crop".to_string(),
            category_id: 1,
        },
        Product {
            id: 2,
            name: "Laptop Pro".to_string(),
            description: "Powerful laptop for professional work and gaming.".to_string(),
            price_cents: 129_999,
            image: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?q=80&w=2942&auto=format&fit=crop".to_string(),
            category_id: 1,
        },
        Product {
            id: 3,
            name: "Wireless Headphones".to_string(),
            description: "High-quality sound with noise-cancellation technology.".to_string(),
            price_cents: 14_999,
            image: "https://images.unsplash.com/photo-1546435770-a3e426bf472b?q=80&w=2865&auto=format&fit=crop".to_string(),
            category_id: 1,
        },
        Product {
            id: 4,
            name: "Men's T-Shirt".to_string(),
            description: "Comfortable cotton t-shirt for everyday wear.".to_string(),
            price_cents: 2_499,
            image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?q=80&w=2940&auto=format&fit=crop".to_string(),
            category_id: 2,
        },
        Product {
            id: 5,
            name: "Women's Jeans".to_string(),
            description: "Stylish and comfortable jeans for women.".to_string(),
            price_cents: 5_999,
            image: "https://images.unsplash.com/photo-1565084888279-aca607ecce0c?q=80&w=2940&auto=format&fit=crop".to_string(),
            category_id: 2,
        },
        Product {
            id: 6,
            name: "Sneakers".to_string(),
            description: "Comfortable sneakers for everyday activities.".to_string(),
            price_cents: 8_999,
            image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=2940&auto=format&fit=crop".to_string(),
            category_id: 2,
        },
        Product {
            id: 7,
            name: "The Art of Programming".to_string(),
            description: "A comprehensive guide to programming fundamentals.".to_string(),
            price_cents: 3_499,
            image: "https://images.unsplash.com/photo-1532012197267-da84d127e765?q=80&w=2787&auto=format&fit=crop".to_string(),
            category_id: 3,
        },
        Product {
            id: 8,
            name: "History of Ancient Civilizations".to_string(),
            description: "Explore the fascinating history of ancient civilizations.".to_string(),
            price_cents: 2_999,
            image: "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?q=80&w=2942&auto=format&fit=crop".to_string(),
            category_id: 3,
        },
        Product {
            id: 9,
            name: "Garden Chair Set".to_string(),
            description: "Comfortable chairs for your garden or patio.".to_string(),
            price_cents: 19_999,
            image: "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?q=80&w=2865&auto=format&fit=crop".to_string(),
            category_id: 4,
        },
        Product {
            id: 10,
            name: "Basketball".to_string(),
            description: "Professional basketball for indoor and outdoor play.".to_string(),
            price_cents: 2_999,
            image: "https://images.unsplash.com/photo-1546519638-68e109498ffc?q=80&w=2890&auto=format&fit=crop".to_string(),
            category_id: 5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique() {
        let categories = categories();
        let products = products();

        let category_ids: HashSet<u32> = categories.iter().map(|c| c.id).collect();
        let product_ids: HashSet<u32> = products.iter().map(|p| p.id).collect();

        assert_eq!(category_ids.len(), categories.len());
        assert_eq!(product_ids.len(), products.len());
    }

    #[test]
    fn test_every_product_references_a_category() {
        let category_ids: HashSet<u32> = categories().iter().map(|c| c.id).collect();
        assert!(products().iter().all(|p| category_ids.contains(&p.category_id)));
    }

    #[test]
    fn test_prices_are_non_negative() {
        assert!(products().iter().all(|p| p.price_cents >= 0));
    }
}
