mod conversion_test;
