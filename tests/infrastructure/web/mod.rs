mod importer_test;
