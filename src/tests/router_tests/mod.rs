mod categories_tests;
mod dashboard_tests;
mod offers_tests;
mod reservations_tests;
