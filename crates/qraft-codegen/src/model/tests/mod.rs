mod code_model_builder_tests;
mod type_mapper_tests;
