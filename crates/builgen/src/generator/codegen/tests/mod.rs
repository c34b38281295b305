mod method_tests;
