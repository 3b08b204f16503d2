// Customer service
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Operations on one customer.

use crate::driver::CustomerStore;
use crate::model::*;
use customer_service_core::driver::{DriverError, DriverResult};
use log::{info, warn};

impl CustomerStore {
    /// Stores the customer described by `request`, replacing any existing record with the same
    /// id, and returns the stored record.
    pub(crate) fn create(&self, request: NewCustomer) -> Customer {
        let customer = request.into_customer();
        self.customers.insert(customer.id().clone(), customer.clone());
        info!(
            "Customer created: id={}, name={}, tier={}",
            customer.id(),
            customer.name(),
            customer.tier()
        );
        customer
    }

    /// Gets a copy of the customer identified by `id`.
    pub(crate) fn get(&self, id: &CustomerId) -> DriverResult<Customer> {
        let customer = self.customers.get(id).map(|entry| entry.value().clone());
        match customer {
            Some(customer) => {
                info!("Customer retrieved: id={}, name={}", id, customer.name());
                Ok(customer)
            }
            None => {
                warn!("Customer not found: id={}", id);
                Err(DriverError::NotFound(format!("Customer {} not found", id)))
            }
        }
    }

    /// Deletes the customer identified by `id`.  Deleting a missing customer does nothing.
    pub(crate) fn delete(&self, id: &CustomerId) {
        match self.customers.remove(id) {
            Some((_, removed)) => {
                info!("Customer deleted: id={}, name={}", id, removed.name());
            }
            None => {
                warn!("Attempted to delete non-existent customer: id={}", id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use log::Level;
    use std::thread;

    #[test]
    fn test_create_generates_id() {
        let store = setup();

        let before = store.list();
        let customer = store.create(new_customer(None, "Dana"));
        assert!(!customer.id().as_str().is_empty());
        assert!(!before.contains_key(customer.id()));

        assert_eq!("Dana", customer.name());
        assert_eq!("dana@example.com", customer.email());
        assert_eq!("GOLD", customer.tier());
        assert!(has_log(
            Level::Info,
            &format!("Customer created: id={}, name=Dana, tier=GOLD", customer.id())
        ));
    }

    #[test]
    fn test_create_keeps_given_id() {
        let store = setup();

        let customer = store.create(new_customer(Some("custom-id"), "Frank"));
        assert_eq!("custom-id", customer.id().as_str());
        assert_eq!(customer, store.get(customer.id()).unwrap());
    }

    #[test]
    fn test_create_accepts_any_tier() {
        let store = setup();

        let customer = store.create(NewCustomer {
            id: None,
            name: "Grace".to_owned(),
            email: "not an email".to_owned(),
            tier: "PLATINUM".to_owned(),
        });
        let stored = store.get(customer.id()).unwrap();
        assert_eq!("PLATINUM", stored.tier());
        assert_eq!("not an email", stored.email());
    }

    #[test]
    fn test_create_overwrites_existing() {
        let store = setup();

        store.create(NewCustomer {
            id: Some(CustomerId::new("1".to_owned())),
            name: "X".to_owned(),
            email: "x@example.com".to_owned(),
            tier: "SILVER".to_owned(),
        });

        let customer = store.get(&CustomerId::new("1".to_owned())).unwrap();
        let exp = Customer::new(
            CustomerId::new("1".to_owned()),
            "X".to_owned(),
            "x@example.com".to_owned(),
            "SILVER".to_owned(),
        );
        assert_eq!(exp, customer);
        assert_eq!(3, store.list().len());
    }

    #[test]
    fn test_get_ok() {
        let store = setup();

        let exp = store.create(new_customer(None, "Heidi"));
        let customer = store.get(exp.id()).unwrap();
        assert_eq!(exp, customer);
        assert!(has_log(
            Level::Info,
            &format!("Customer retrieved: id={}, name=Heidi", exp.id())
        ));
    }

    #[test]
    fn test_get_not_found() {
        let store = setup();

        let id = CustomerId::new("get-missing".to_owned());
        assert_eq!(
            DriverError::NotFound("Customer get-missing not found".to_owned()),
            store.get(&id).unwrap_err()
        );
        assert!(has_log(Level::Warn, "Customer not found: id=get-missing"));
    }

    #[test]
    fn test_delete_ok() {
        let store = setup();

        let customer = store.create(new_customer(None, "Mallory"));
        store.delete(customer.id());

        assert!(store.get(customer.id()).is_err());
        assert_eq!(3, store.list().len());
        assert!(has_log(
            Level::Info,
            &format!("Customer deleted: id={}, name=Mallory", customer.id())
        ));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let store = setup();

        let id = CustomerId::new("delete-missing".to_owned());
        store.delete(&id);

        assert!(store.get(&id).is_err());
        assert_eq!(3, store.list().len());
        assert!(has_log(
            Level::Warn,
            "Attempted to delete non-existent customer: id=delete-missing"
        ));
    }

    #[test]
    fn test_delete_twice() {
        let store = setup();

        let id = CustomerId::new("2".to_owned());
        store.delete(&id);
        let after_once = store.list();
        store.delete(&id);
        let after_twice = store.list();

        assert_eq!(after_once, after_twice);
        assert_eq!(2, after_twice.len());
        assert!(store.get(&id).is_err());
    }

    #[test]
    fn test_concurrent_writers_same_id() {
        let store = setup();

        let handles = (0..16)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        store.create(NewCustomer {
                            id: Some(CustomerId::new("contended".to_owned())),
                            name: format!("Writer {}", i),
                            email: format!("writer{}@example.com", i),
                            tier: "GOLD".to_owned(),
                        });
                    }
                })
            })
            .collect::<Vec<_>>();

        // Readers must always see whole records while the writers race.
        for _ in 0..200 {
            if let Ok(customer) = store.get(&CustomerId::new("contended".to_owned())) {
                let n = customer.name().strip_prefix("Writer ").unwrap();
                assert_eq!(&format!("writer{}@example.com", n), customer.email());
            }
        }

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(4, store.list().len());
    }
}
