mod fragment_rule_tests;
mod selection_rule_tests;
mod value_rule_tests;
mod variable_rule_tests;
