//! Property-based tests for the checkout/return protocol
//!
//! Random sequences of checkouts and returns must keep the catalog, the
//! directory and the ledger in agreement after every step.

#[cfg(test)]
mod tests {
    use crate::{Error, Library};
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;

    const BOOKS: [&str; 5] = ["B0", "B1", "B2", "B3", "B4"];
    const USERS: [&str; 3] = ["U0", "U1", "U2"];

    #[derive(Clone, Debug)]
    enum Op {
        Checkout { user: usize, book: usize },
        Return { user: usize, book: usize },
        Wait { days: u64 },
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..USERS.len(), 0..BOOKS.len()).prop_map(|(user, book)| Op::Checkout { user, book }),
            (0..USERS.len(), 0..BOOKS.len()).prop_map(|(user, book)| Op::Return { user, book }),
            (0u64..12).prop_map(|days| Op::Wait { days }),
        ]
    }

    fn seeded_library() -> Library {
        crate::logging::init_test();
        let mut library = Library::default();
        for code in BOOKS {
            library.register_book("Title", "Author", code).unwrap();
        }
        for id in USERS {
            library.register_user("Name", id).unwrap();
        }
        library
    }

    fn assert_consistent(library: &Library) {
        for book in library.catalog().iter() {
            let open = library
                .history()
                .filter(|l| l.book_code == book.code)
                .count();
            assert!(open <= 1, "book {} has {} open loans", book.code, open);
            assert_eq!(book.available, open == 0, "availability of {}", book.code);
        }

        for user in library.directory().list_all() {
            assert!(user.borrowed.len() <= library.policy().max_loans);
            let from_ledger: Vec<_> = library
                .loans_for(&user.id)
                .map(|l| l.book_code.clone())
                .collect();
            assert_eq!(user.borrowed, from_ledger, "borrowed list of {}", user.id);
        }

        for loan in library.history() {
            assert!(library.directory().find_by_id(&loan.user_id).is_some());
            assert!(library.catalog().find_by_code(&loan.book_code).is_some());
        }
    }

    proptest! {
        #[test]
        fn test_state_stays_consistent(ops in prop::collection::vec(op(), 0..60)) {
            let mut library = seeded_library();
            let mut today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

            for op in ops {
                match op {
                    Op::Checkout { user, book } => {
                        let before = library.history().count();
                        match library.checkout(USERS[user], BOOKS[book], today) {
                            Ok(receipt) => {
                                prop_assert_eq!(library.history().count(), before + 1);
                                prop_assert_eq!(receipt.due, library.policy().due_date(today));
                            }
                            Err(Error::Unavailable(_)) | Err(Error::LimitReached { .. }) => {
                                prop_assert_eq!(library.history().count(), before);
                            }
                            Err(e) => {
                                prop_assert!(false, "unexpected error: {}", e);
                            }
                        }
                    }
                    Op::Return { user, book } => {
                        let before = library.history().count();
                        match library.return_book(USERS[user], BOOKS[book], today) {
                            Ok(_) => {
                                prop_assert_eq!(library.history().count(), before - 1);
                            }
                            Err(Error::ReturnMismatch { .. }) => {
                                prop_assert_eq!(library.history().count(), before);
                            }
                            Err(e) => {
                                prop_assert!(false, "unexpected error: {}", e);
                            }
                        }
                    }
                    Op::Wait { days } => {
                        today = today.checked_add_days(Days::new(days)).unwrap();
                    }
                }
                assert_consistent(&library);
            }
        }

        #[test]
        fn test_fine_is_rate_times_late_days(late in 0u64..400) {
            let mut library = seeded_library();
            let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            library.checkout("U0", "B0", start).unwrap();

            let returned_on = start.checked_add_days(Days::new(7 + late)).unwrap();
            let outcome = library.return_book("U0", "B0", returned_on).unwrap();
            prop_assert_eq!(outcome.fine(), late * 500);
        }
    }
}
