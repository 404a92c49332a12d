mod budget_service_tests;
mod category_service_tests;
