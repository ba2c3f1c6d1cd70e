//! Integration tests for the order service against the in-memory store.

use common::OrderId;
use domain::{
    Address, DiscountCode, DomainError, OrderItem, OrderService, OrderStatus, PlaceOrder,
    PositiveNumber, UpdateOrder, ValidationError,
};
use order_store::InMemoryOrderStore;

fn service() -> OrderService<InMemoryOrderStore> {
    OrderService::new(InMemoryOrderStore::new())
}

fn item(quantity: f64, price: f64) -> OrderItem {
    OrderItem::new(
        OrderId::new(),
        PositiveNumber::new(quantity).unwrap(),
        PositiveNumber::new(price).unwrap(),
    )
}

fn place_cmd(items: Vec<OrderItem>, discount: Option<&str>) -> PlaceOrder {
    PlaceOrder::new(
        items,
        Address::new("123 Main St").unwrap(),
        discount.and_then(DiscountCode::parse),
    )
}

#[tokio::test]
async fn place_order_persists_and_reloads() {
    let service = service();

    let placed = service
        .place_order(place_cmd(vec![item(1.0, 100.0)], None))
        .await
        .unwrap();

    let loaded = service.get_order(placed.id()).await.unwrap().unwrap();
    assert_eq!(loaded, placed);
    assert_eq!(loaded.calculate_total().value(), 100.0);
    assert!(!loaded.is_completed());
}

#[tokio::test]
async fn place_order_without_items_fails() {
    let service = service();

    let err = service
        .place_order(place_cmd(vec![], None))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "The order must have at least one item");
}

#[tokio::test]
async fn list_orders_returns_all_placed_orders() {
    let service = service();
    service
        .place_order(place_cmd(vec![item(1.0, 10.0)], None))
        .await
        .unwrap();
    service
        .place_order(place_cmd(vec![item(2.0, 10.0)], Some("DISCOUNT20")))
        .await
        .unwrap();

    let orders = service.list_orders().await.unwrap();
    assert_eq!(orders.len(), 2);
}

#[tokio::test]
async fn get_order_absent_returns_none() {
    let service = service();
    let result = service.get_order(&OrderId::new()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn complete_order_transitions_once() {
    let service = service();
    let placed = service
        .place_order(place_cmd(vec![item(1.0, 10.0)], None))
        .await
        .unwrap();

    let completed = service.complete_order(placed.id()).await.unwrap();
    assert!(completed.is_completed());

    // The new status survives the store round-trip.
    let reloaded = service.get_order(placed.id()).await.unwrap().unwrap();
    assert_eq!(reloaded.status(), OrderStatus::Completed);

    // A second completion is rejected by the transition guard.
    let err = service.complete_order(placed.id()).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationError::InvalidStatusTransition(
            OrderStatus::Completed
        ))
    ));
    assert_eq!(
        err.to_string(),
        "Cannot complete an order with status: COMPLETED"
    );
}

#[tokio::test]
async fn complete_order_missing_is_not_found() {
    let service = service();
    let err = service.complete_order(&OrderId::new()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn update_order_replaces_address_and_discount() {
    let service = service();
    let placed = service
        .place_order(place_cmd(vec![item(2.0, 10.0), item(2.0, 10.0)], None))
        .await
        .unwrap();

    let cmd = UpdateOrder::new()
        .shipping_address(Address::new("456 Oak Ave").unwrap())
        .discount_code(DiscountCode::parse("DISCOUNT20").unwrap());
    let updated = service.update_order(placed.id(), cmd).await.unwrap();

    assert_eq!(updated.shipping_address().as_str(), "456 Oak Ave");
    assert_eq!(updated.calculate_total().value(), 32.0);

    let reloaded = service.get_order(placed.id()).await.unwrap().unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn update_order_completed_status_goes_through_guard() {
    let service = service();
    let placed = service
        .place_order(place_cmd(vec![item(1.0, 10.0)], None))
        .await
        .unwrap();

    let updated = service
        .update_order(placed.id(), UpdateOrder::new().status(OrderStatus::Completed))
        .await
        .unwrap();
    assert!(updated.is_completed());

    let err = service
        .update_order(placed.id(), UpdateOrder::new().status(OrderStatus::Completed))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn update_order_missing_is_not_found() {
    let service = service();
    let err = service
        .update_order(&OrderId::new(), UpdateOrder::new())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn delete_order_removes_record() {
    let service = service();
    let placed = service
        .place_order(place_cmd(vec![item(1.0, 10.0)], None))
        .await
        .unwrap();

    service.delete_order(placed.id()).await.unwrap();
    assert!(service.get_order(placed.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_order_missing_is_not_found() {
    let service = service();
    let err = service.delete_order(&OrderId::new()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn unrecognized_discount_code_is_stored_but_inert() {
    let service = service();
    let placed = service
        .place_order(place_cmd(vec![item(1.0, 10.0)], Some("SUMMER50")))
        .await
        .unwrap();

    let reloaded = service.get_order(placed.id()).await.unwrap().unwrap();
    assert_eq!(reloaded.discount_code().unwrap().as_str(), "SUMMER50");
    assert_eq!(reloaded.calculate_total().value(), 10.0);
}
