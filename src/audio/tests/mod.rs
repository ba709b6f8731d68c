mod buffer_list;
