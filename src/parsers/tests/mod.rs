mod block_parser_tests;
