mod source_document_tests;
