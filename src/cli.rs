use clap::{Arg, ArgAction, Command};

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help("Output format: simple, table, json")
        .default_value("simple")
}

fn workspace_arg() -> Arg {
    Arg::new("workspace")
        .long("workspace")
        .short('w')
        .value_name("WORKSPACE_ID")
        .help("Workspace ID (defaults to the current project's workspace)")
        .global(true)
}

fn project_arg() -> Arg {
    Arg::new("project")
        .long("project")
        .short('p')
        .value_name("PROJECT_ID")
        .help("Project ID (defaults to the current project)")
        .global(true)
}

fn id_arg(name: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .value_name(value_name)
        .help(help)
        .required(true)
}

fn description_arg() -> Arg {
    Arg::new("description")
        .long("description")
        .short('d')
        .value_name("TEXT")
        .help("Description")
}

fn auth_command() -> Command {
    Command::new("auth")
        .about("Log in, register and inspect the stored session")
        .subcommand_required(true)
        .subcommand(
            Command::new("login")
                .about("Log in with email and password")
                .arg(Arg::new("email").long("email").short('e').value_name("EMAIL").required(true))
                .arg(
                    Arg::new("password")
                        .long("password")
                        .value_name("PASSWORD")
                        .help("Password (prompted when omitted)")
                )
        )
        .subcommand(
            Command::new("register")
                .about("Create an account and log in")
                .arg(Arg::new("name").long("name").short('n').value_name("NAME").required(true))
                .arg(Arg::new("email").long("email").short('e').value_name("EMAIL").required(true))
                .arg(
                    Arg::new("password")
                        .long("password")
                        .value_name("PASSWORD")
                        .help("Password, at least 6 characters (prompted when omitted)")
                )
        )
        .subcommand(Command::new("logout").about("Forget the stored token"))
        .subcommand(Command::new("whoami").about("Show the logged-in user and token details"))
}

fn workspaces_command() -> Command {
    Command::new("workspaces")
        .about("Manage workspaces")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List your workspaces").arg(format_arg()))
        .subcommand(
            Command::new("show")
                .about("Show a workspace")
                .arg(id_arg("id", "WORKSPACE_ID", "Workspace ID"))
        )
        .subcommand(
            Command::new("create")
                .about("Create a workspace")
                .arg(id_arg("name", "NAME", "Workspace name"))
                .arg(description_arg())
        )
        .subcommand(
            Command::new("update")
                .about("Update a workspace")
                .arg(id_arg("id", "WORKSPACE_ID", "Workspace ID"))
                .arg(Arg::new("name").long("name").short('n').value_name("NAME").help("New name"))
                .arg(description_arg())
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a workspace")
                .arg(id_arg("id", "WORKSPACE_ID", "Workspace ID"))
        )
        .subcommand(
            Command::new("members")
                .about("Manage workspace members")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("List members")
                        .arg(id_arg("workspace", "WORKSPACE_ID", "Workspace ID"))
                )
                .subcommand(
                    Command::new("add")
                        .about("Add a member")
                        .arg(id_arg("workspace", "WORKSPACE_ID", "Workspace ID"))
                        .arg(id_arg("user", "USER_ID", "User ID"))
                        .arg(
                            Arg::new("role")
                                .long("role")
                                .short('r')
                                .value_name("ROLE")
                                .help("Role: owner, admin, member, viewer")
                                .default_value("member")
                        )
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove a member")
                        .arg(id_arg("workspace", "WORKSPACE_ID", "Workspace ID"))
                        .arg(id_arg("user", "USER_ID", "User ID"))
                )
        )
}

fn project_fields(command: Command) -> Command {
    command
        .arg(description_arg())
        .arg(
            Arg::new("deadline")
                .long("deadline")
                .value_name("YYYY-MM-DD")
                .help("Deadline, not earlier than today")
        )
        .arg(
            Arg::new("status")
                .long("status")
                .short('s')
                .value_name("STATUS")
                .help("Status: planning, in-progress, on-hold, completed")
        )
}

fn projects_command() -> Command {
    Command::new("projects")
        .about("Manage projects")
        .subcommand_required(true)
        .arg(workspace_arg())
        .subcommand(Command::new("list").about("List projects in a workspace").arg(format_arg()))
        .subcommand(
            Command::new("show")
                .about("Show a project and its tasks")
                .arg(id_arg("id", "PROJECT_ID", "Project ID"))
        )
        .subcommand(project_fields(
            Command::new("create")
                .about("Create a project")
                .arg(id_arg("name", "NAME", "Project name"))
        ))
        .subcommand(project_fields(
            Command::new("update")
                .about("Update a project")
                .arg(id_arg("id", "PROJECT_ID", "Project ID"))
                .arg(Arg::new("name").long("name").short('n').value_name("NAME").help("New name"))
        ))
        .subcommand(
            Command::new("delete")
                .about("Delete a project")
                .arg(id_arg("id", "PROJECT_ID", "Project ID"))
        )
        .subcommand(
            Command::new("use")
                .about("Set the current project")
                .arg(Arg::new("id").value_name("PROJECT_ID").help("Project ID"))
                .arg(
                    Arg::new("clear")
                        .long("clear")
                        .help("Unset the current project")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("members")
                .about("Manage project members")
                .subcommand_required(true)
                .arg(project_arg())
                .subcommand(Command::new("list").about("List members"))
                .subcommand(
                    Command::new("add")
                        .about("Add a member")
                        .arg(id_arg("user", "USER_ID", "User ID"))
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove a member")
                        .arg(id_arg("user", "USER_ID", "User ID"))
                )
        )
}

fn task_fields(command: Command) -> Command {
    command
        .arg(description_arg())
        .arg(
            Arg::new("priority")
                .long("priority")
                .value_name("PRIORITY")
                .help("Priority: low, medium, high")
        )
        .arg(
            Arg::new("status")
                .long("status")
                .short('s')
                .value_name("STATUS")
                .help("Status: todo, in-progress, review, completed")
        )
        .arg(
            Arg::new("assignee")
                .long("assignee")
                .short('a')
                .value_name("USER_ID")
                .help("Assignee user ID")
        )
        .arg(
            Arg::new("due")
                .long("due")
                .value_name("YYYY-MM-DD")
                .help("Due date, not earlier than today")
        )
}

fn tasks_command() -> Command {
    Command::new("tasks")
        .about("Manage tasks in a project")
        .subcommand_required(true)
        .arg(workspace_arg())
        .arg(project_arg())
        .subcommand(
            Command::new("list")
                .about("List tasks")
                .arg(format_arg())
                .arg(
                    Arg::new("status")
                        .long("status")
                        .short('s')
                        .value_name("STATUS")
                        .help("Only tasks with this status")
                )
                .arg(
                    Arg::new("priority")
                        .long("priority")
                        .value_name("PRIORITY")
                        .help("Only tasks with this priority")
                )
                .arg(
                    Arg::new("mine")
                        .long("mine")
                        .help("Only tasks assigned to me")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("show")
                .about("Show a task with subtasks and files")
                .arg(id_arg("id", "TASK_ID", "Task ID"))
        )
        .subcommand(task_fields(
            Command::new("create")
                .about("Create a task")
                .arg(id_arg("title", "TITLE", "Task title"))
        ))
        .subcommand(task_fields(
            Command::new("update")
                .about("Update a task")
                .arg(id_arg("id", "TASK_ID", "Task ID"))
                .arg(Arg::new("title").long("title").short('t').value_name("TITLE").help("New title"))
        ))
        .subcommand(
            Command::new("status")
                .about("Move a task to another status")
                .arg(id_arg("id", "TASK_ID", "Task ID"))
                .arg(id_arg("status", "STATUS", "todo, in-progress, review, completed"))
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a task")
                .arg(id_arg("id", "TASK_ID", "Task ID"))
        )
        .subcommand(
            Command::new("subtasks")
                .about("Manage a task's checklist")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("List subtasks")
                        .arg(id_arg("task", "TASK_ID", "Task ID"))
                )
                .subcommand(
                    Command::new("add")
                        .about("Add a subtask")
                        .arg(id_arg("task", "TASK_ID", "Task ID"))
                        .arg(id_arg("title", "TITLE", "Subtask title"))
                )
                .subcommand(
                    Command::new("done")
                        .about("Mark a subtask done")
                        .arg(id_arg("task", "TASK_ID", "Task ID"))
                        .arg(id_arg("subtask", "SUBTASK_ID", "Subtask ID"))
                )
                .subcommand(
                    Command::new("undone")
                        .about("Mark a subtask not done")
                        .arg(id_arg("task", "TASK_ID", "Task ID"))
                        .arg(id_arg("subtask", "SUBTASK_ID", "Subtask ID"))
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a subtask")
                        .arg(id_arg("task", "TASK_ID", "Task ID"))
                        .arg(id_arg("subtask", "SUBTASK_ID", "Subtask ID"))
                )
        )
        .subcommand(
            Command::new("follow")
                .about("Follow a task")
                .arg(id_arg("id", "TASK_ID", "Task ID"))
        )
        .subcommand(
            Command::new("unfollow")
                .about("Stop following a task")
                .arg(id_arg("id", "TASK_ID", "Task ID"))
        )
        .subcommand(
            Command::new("files")
                .about("Manage task attachments")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("List attachments")
                        .arg(id_arg("task", "TASK_ID", "Task ID"))
                )
                .subcommand(
                    Command::new("upload")
                        .about("Upload a file")
                        .arg(id_arg("task", "TASK_ID", "Task ID"))
                        .arg(id_arg("path", "PATH", "File to upload"))
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete an attachment")
                        .arg(id_arg("task", "TASK_ID", "Task ID"))
                        .arg(id_arg("file", "FILE_ID", "File ID"))
                )
        )
}

fn users_command() -> Command {
    Command::new("users")
        .about("Browse the user directory")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List users").arg(format_arg()))
        .subcommand(
            Command::new("search")
                .about("Search users by name or email")
                .arg(id_arg("query", "QUERY", "Search text"))
                .arg(format_arg())
        )
        .subcommand(
            Command::new("show")
                .about("Show a user")
                .arg(id_arg("id", "USER_ID", "User ID"))
        )
        .subcommand(
            Command::new("update")
                .about("Update a user's name or email")
                .arg(id_arg("id", "USER_ID", "User ID"))
                .arg(Arg::new("name").long("name").short('n').value_name("NAME").help("New name"))
                .arg(Arg::new("email").long("email").short('e').value_name("EMAIL").help("New email"))
        )
}

fn notifications_command() -> Command {
    Command::new("notifications")
        .about("Read notifications")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("List notifications")
                .arg(format_arg())
                .arg(
                    Arg::new("unread")
                        .long("unread")
                        .short('u')
                        .help("Only unread notifications")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("read")
                .about("Mark a notification read")
                .arg(id_arg("id", "NOTIFICATION_ID", "Notification ID"))
        )
        .subcommand(Command::new("read-all").about("Mark every notification read"))
        .subcommand(Command::new("count").about("Show the number of unread notifications"))
        .subcommand(
            Command::new("watch")
                .about("Poll for new notifications until interrupted")
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .value_name("SECONDS")
                        .help("Polling interval in seconds")
                        .value_parser(clap::value_parser!(u64).range(1..))
                )
        )
}

fn prefs_command() -> Command {
    Command::new("prefs")
        .about("Show or change display preferences")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Show preferences"))
        .subcommand(
            Command::new("dark-mode")
                .about("Switch dark mode")
                .arg(
                    Arg::new("value")
                        .value_name("on|off|toggle")
                        .value_parser(["on", "off", "toggle"])
                        .default_value("toggle")
                )
        )
        .subcommand(
            Command::new("sidebar")
                .about("Collapse or expand the interactive sidebar")
                .arg(
                    Arg::new("value")
                        .value_name("collapsed|expanded|toggle")
                        .value_parser(["collapsed", "expanded", "toggle"])
                        .default_value("toggle")
                )
        )
}

/// Builds the full `taskboard` command tree.
pub fn build_cli() -> Command {
    Command::new("taskboard")
        .about("Taskboard CLI - manage workspaces, projects and tasks from the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(auth_command())
        .subcommand(Command::new("dashboard").about("Show your dashboard"))
        .subcommand(workspaces_command())
        .subcommand(projects_command())
        .subcommand(tasks_command())
        .subcommand(users_command())
        .subcommand(notifications_command())
        .subcommand(
            Command::new("gantt")
                .about("Draw a Gantt chart of a project's tasks")
                .arg(workspace_arg())
                .arg(project_arg())
        )
        .subcommand(
            Command::new("tree")
                .about("Print the workspace/project/task tree")
                .arg(
                    Arg::new("all")
                        .long("all")
                        .short('a')
                        .help("Expand every workspace and project")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(prefs_command())
        .subcommand(
            Command::new("interactive")
                .about("Open the interactive terminal UI")
                .visible_alias("tui")
        )
}
