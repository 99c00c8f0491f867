//! Blade view stubs (Bootstrap 5 + Font Awesome)
//!
//! The `{{BLADE_CAN_*}}` wrappers are empty when no authorization style is
//! active, leaving every affordance visible.

/// `index.blade.php`; the table itself comes from `{{BULK_DELETE_BLOCK}}`
pub const INDEX_VIEW: &str = r##"@extends('layouts.app')

@section('content')
<div class="container">
    <div class="d-flex justify-content-between align-items-center mb-3">
        <h1 class="h3 mb-0">{{MODEL_CLASS}} List</h1>

        <div class="d-flex gap-2">
            @if (Route::has('{{ROUTE_NAME}}.trash'))
            {{BLADE_CAN_TRASH_BEGIN}}<a href="{{ route('{{ROUTE_NAME}}.trash') }}" class="btn btn-outline-secondary">
                <i class="fa-solid fa-trash-can"></i> Trash
            </a>{{BLADE_CAN_TRASH_END}}
            @endif

            {{BLADE_CAN_CREATE_BEGIN}}<a href="{{ route('{{ROUTE_NAME}}.create') }}" class="btn btn-primary">
                <i class="fa-solid fa-plus"></i> New {{MODEL_CLASS}}
            </a>{{BLADE_CAN_CREATE_END}}
        </div>
    </div>

    @if (session('success'))
        <div class="alert alert-success">{{ session('success') }}</div>
    @endif

{{BULK_DELETE_BLOCK}}

    <div class="mt-3">
        {{ ${{MODEL_VAR_PLURAL}}->links() }}
    </div>
</div>
@endsection
"##;

/// `create.blade.php`
pub const CREATE_VIEW: &str = r##"@extends('layouts.app')

@section('content')
<div class="container">
    <h1 class="h3 mb-3">Create {{MODEL_CLASS}}</h1>

    {{BLADE_CAN_CREATE_BEGIN}}<div class="card">
        <div class="card-body">
            <form method="POST" action="{{ route('{{ROUTE_NAME}}.store') }}">
                @csrf

                @include('{{VIEW_FOLDER}}._form', ['{{MODEL_VAR}}' => ${{MODEL_VAR}} ?? null])

                <button type="submit" class="btn btn-primary">Save</button>
                <a href="{{ route('{{ROUTE_NAME}}.index') }}" class="btn btn-outline-secondary">Cancel</a>
            </form>
        </div>
    </div>{{BLADE_CAN_CREATE_END}}
</div>
@endsection
"##;

/// `edit.blade.php`
pub const EDIT_VIEW: &str = r##"@extends('layouts.app')

@section('content')
<div class="container">
    <h1 class="h3 mb-3">Edit {{MODEL_CLASS}} #{{ ${{MODEL_VAR}}->id }}</h1>

    {{BLADE_CAN_UPDATE_BEGIN}}<div class="card">
        <div class="card-body">
            <form method="POST" action="{{ route('{{ROUTE_NAME}}.update', ${{MODEL_VAR}}) }}">
                @csrf
                @method('PUT')

                @include('{{VIEW_FOLDER}}._form', ['{{MODEL_VAR}}' => ${{MODEL_VAR}}])

                <button type="submit" class="btn btn-primary">Update</button>
                <a href="{{ route('{{ROUTE_NAME}}.show', ${{MODEL_VAR}}) }}" class="btn btn-outline-secondary">Cancel</a>
            </form>
        </div>
    </div>{{BLADE_CAN_UPDATE_END}}
</div>
@endsection
"##;

/// `show.blade.php`
pub const SHOW_VIEW: &str = r##"@extends('layouts.app')

@section('content')
<div class="container">
    <div class="d-flex justify-content-between align-items-center mb-3">
        <h1 class="h3 mb-0">{{MODEL_CLASS}} #{{ ${{MODEL_VAR}}->id }}</h1>
        <a href="{{ route('{{ROUTE_NAME}}.index') }}" class="btn btn-outline-secondary">
            <i class="fa-solid fa-arrow-left"></i> Back
        </a>
    </div>

    @if (session('success'))
        <div class="alert alert-success">{{ session('success') }}</div>
    @endif

    <div class="card">
        <div class="card-body">
            <dl class="row mb-0">
                <dt class="col-sm-3">ID</dt>
                <dd class="col-sm-9">{{ ${{MODEL_VAR}}->id }}</dd>

                <dt class="col-sm-3">Name</dt>
                <dd class="col-sm-9">{{ ${{MODEL_VAR}}->name ?? '-' }}</dd>

                <dt class="col-sm-3">Created</dt>
                <dd class="col-sm-9">{{ ${{MODEL_VAR}}->created_at }}</dd>

                <dt class="col-sm-3">Updated</dt>
                <dd class="col-sm-9">{{ ${{MODEL_VAR}}->updated_at }}</dd>
            </dl>
        </div>
        <div class="card-footer d-flex gap-2">
            {{BLADE_CAN_UPDATE_BEGIN}}<a href="{{ route('{{ROUTE_NAME}}.edit', ${{MODEL_VAR}}) }}" class="btn btn-outline-primary">
                <i class="fa-solid fa-pen-to-square"></i> Edit
            </a>{{BLADE_CAN_UPDATE_END}}

            {{BLADE_CAN_DELETE_BEGIN}}<form method="POST" action="{{ route('{{ROUTE_NAME}}.destroy', ${{MODEL_VAR}}) }}" class="d-inline">
                @csrf
                @method('DELETE')
                <button type="submit" class="btn btn-outline-danger" onclick="return confirm('Delete?')">
                    <i class="fa-solid fa-trash"></i> Delete
                </button>
            </form>{{BLADE_CAN_DELETE_END}}
        </div>
    </div>
</div>
@endsection
"##;

/// `_form.blade.php`, shared by create and edit
pub const FORM_VIEW: &str = r##"<div class="mb-3">
    <label for="name" class="form-label">Name</label>
    <input type="text" name="name" id="name"
           class="form-control @error('name') is-invalid @enderror"
           value="{{ old('name', ${{MODEL_VAR}}->name ?? '') }}" required>
    @error('name')
        <div class="invalid-feedback">{{ $message }}</div>
    @enderror
</div>
"##;

/// `trash.blade.php`, generated only with soft deletes
pub const TRASH_VIEW: &str = r##"@extends('layouts.app')

@section('content')
<div class="container">
    <div class="d-flex justify-content-between align-items-center mb-3">
        <h1 class="h3 mb-0">{{MODEL_CLASS}} Trash</h1>
        <a href="{{ route('{{ROUTE_NAME}}.index') }}" class="btn btn-outline-secondary">
            <i class="fa-solid fa-arrow-left"></i> Back to list
        </a>
    </div>

    @if (session('success'))
        <div class="alert alert-success">{{ session('success') }}</div>
    @endif

    <div class="card mb-3">
        <div class="card-body d-flex justify-content-between align-items-center">
            <div class="form-check">
                <input class="form-check-input" type="checkbox" id="selectAll">
                <label class="form-check-label" for="selectAll">Select All</label>
            </div>

            <div class="d-flex gap-2">
                {{BLADE_CAN_RESTORE_BULK_BEGIN}}<form method="POST" action="{{ route('{{ROUTE_NAME}}.restoreBulk') }}" class="bulk-form">
                    @csrf
                    <input type="hidden" name="ids" value="">
                    <button type="submit" class="btn btn-outline-success bulk-btn" disabled
                        onclick="return confirm('Restore selected records?')">
                        Restore (Selected)
                    </button>
                </form>{{BLADE_CAN_RESTORE_BULK_END}}

                {{BLADE_CAN_FORCE_DELETE_BULK_BEGIN}}<form method="POST" action="{{ route('{{ROUTE_NAME}}.forceDeleteBulk') }}" class="bulk-form">
                    @csrf
                    @method('DELETE')
                    <input type="hidden" name="ids" value="">
                    <button type="submit" class="btn btn-outline-danger bulk-btn" disabled
                        onclick="return confirm('Permanently delete selected records? This cannot be undone.')">
                        Permanently Delete (Selected)
                    </button>
                </form>{{BLADE_CAN_FORCE_DELETE_BULK_END}}
            </div>
        </div>
    </div>

    <div class="card">
        <div class="table-responsive">
            <table class="table table-striped table-hover mb-0 align-middle">
                <thead>
                <tr>
                    <th style="width:50px;"></th>
                    <th style="width:90px;">ID</th>
                    <th>Name</th>
                    <th>Deleted</th>
                    <th style="width:200px;" class="text-end">Actions</th>
                </tr>
                </thead>
                <tbody>
                @forelse($items as ${{MODEL_VAR}})
                    <tr>
                        <td>
                            <input class="form-check-input row-check" type="checkbox" value="{{ ${{MODEL_VAR}}->id }}">
                        </td>
                        <td>{{ ${{MODEL_VAR}}->id }}</td>
                        <td>{{ ${{MODEL_VAR}}->name ?? '-' }}</td>
                        <td>{{ ${{MODEL_VAR}}->deleted_at }}</td>
                        <td class="text-end">
                            {{BLADE_CAN_RESTORE_BEGIN}}<form method="POST" action="{{ route('{{ROUTE_NAME}}.restore', ${{MODEL_VAR}}->id) }}" class="d-inline">
                                @csrf
                                <button type="submit" title="Restore" class="btn btn-md btn-outline-success">
                                    <i class="fa-solid fa-rotate-left"></i>
                                </button>
                            </form>{{BLADE_CAN_RESTORE_END}}

                            {{BLADE_CAN_FORCE_DELETE_BEGIN}}<form method="POST" action="{{ route('{{ROUTE_NAME}}.forceDelete', ${{MODEL_VAR}}->id) }}" class="d-inline">
                                @csrf
                                @method('DELETE')
                                <button type="submit" title="Permanently Delete" class="btn btn-md btn-outline-danger"
                                    onclick="return confirm('Permanently delete? This cannot be undone.')">
                                    <i class="fa-solid fa-skull-crossbones"></i>
                                </button>
                            </form>{{BLADE_CAN_FORCE_DELETE_END}}
                        </td>
                    </tr>
                @empty
                    <tr>
                        <td colspan="5" class="text-center text-muted py-4">Trash is empty.</td>
                    </tr>
                @endforelse
                </tbody>
            </table>
        </div>
    </div>

    <div class="mt-3">
        {{ $items->links() }}
    </div>
</div>

<script>
    (function () {
        const selectAll = document.getElementById('selectAll');
        const checks = Array.from(document.querySelectorAll('.row-check'));
        const buttons = Array.from(document.querySelectorAll('.bulk-btn'));

        function selectedIds() {
            return checks.filter(c => c.checked).map(c => c.value);
        }

        function syncState() {
            const ids = selectedIds();
            buttons.forEach(b => b.disabled = ids.length === 0);
            if (selectAll) {
                selectAll.checked = checks.length > 0 && ids.length === checks.length;
                selectAll.indeterminate = ids.length > 0 && ids.length < checks.length;
            }
        }

        if (selectAll) {
            selectAll.addEventListener('change', function () {
                checks.forEach(c => c.checked = selectAll.checked);
                syncState();
            });
        }

        checks.forEach(c => c.addEventListener('change', syncState));

        document.querySelectorAll('.bulk-form').forEach(function (form) {
            form.addEventListener('submit', function () {
                form.querySelector('input[name="ids"]').value = selectedIds().join(',');
            });
        });

        syncState();
    })();
</script>
@endsection
"##;

/// Bulk-delete toolbar and record table spliced into the index view as
/// `{{BULK_DELETE_BLOCK}}`
///
/// Built in code rather than loaded as a project stub; its wording follows
/// the soft-delete mode.
pub const BULK_DELETE_FRAGMENT: &str = r##"    {{-- Bulk toolbar sits outside the table so row forms are not nested --}}
    <form id="bulkDeleteForm" method="POST" action="{{ route('{{ROUTE_NAME}}.destroyBulk') }}" class="mb-3">
        @csrf
        @method('DELETE')

        <input type="hidden" name="ids" id="bulkIds" value="">

        <div class="card">
            <div class="card-body d-flex justify-content-between align-items-center">
                <div class="form-check">
                    <input class="form-check-input" type="checkbox" id="selectAll">
                    <label class="form-check-label" for="selectAll">Select All</label>
                </div>

                {{BLADE_CAN_DELETE_BULK_BEGIN}}<button type="submit" class="btn btn-outline-danger" id="bulkDeleteBtn" disabled
                    onclick="{{BULK_CONFIRM}}">
                    {{BULK_LABEL}}
                </button>{{BLADE_CAN_DELETE_BULK_END}}
            </div>
        </div>
    </form>

    <div class="card">
        <div class="table-responsive">
            <table class="table table-striped table-hover mb-0 align-middle">
                <thead>
                <tr>
                    <th style="width:50px;"></th>
                    <th style="width:90px;">ID</th>
                    <th>Name</th>
                    <th style="width:260px;" class="text-end">Actions</th>
                </tr>
                </thead>
                <tbody>
                @forelse(${{MODEL_VAR_PLURAL}} as ${{MODEL_VAR}})
                    <tr>
                        <td>
                            <input class="form-check-input row-check" type="checkbox" value="{{ ${{MODEL_VAR}}->id }}">
                        </td>
                        <td>{{ ${{MODEL_VAR}}->id }}</td>
                        <td>{{ ${{MODEL_VAR}}->name ?? '-' }}</td>
                        <td class="text-end">
                            <a class="btn btn-md btn-outline-dark" title="Show" href="{{ route('{{ROUTE_NAME}}.show', ${{MODEL_VAR}}) }}">
                                <i class='fa-solid fa-eye'></i>
                            </a>

                            {{BLADE_CAN_UPDATE_BEGIN}}<a class="btn btn-md btn-outline-primary" title="Edit" href="{{ route('{{ROUTE_NAME}}.edit', ${{MODEL_VAR}}) }}">
                                <i class='fa-solid fa-pen-to-square'></i>
                            </a>{{BLADE_CAN_UPDATE_END}}

                            {{BLADE_CAN_DELETE_BEGIN}}<form method="POST" action="{{ route('{{ROUTE_NAME}}.destroy', ${{MODEL_VAR}}) }}" class="d-inline">
                                @csrf
                                @method('DELETE')
                                <button type="submit" title="{{DELETE_TITLE}}" class="btn btn-md btn-outline-danger"
                                    onclick="return confirm('Delete?')">{{DELETE_ICON}}</button>
                            </form>{{BLADE_CAN_DELETE_END}}
                        </td>
                    </tr>
                @empty
                    <tr>
                        <td colspan="4" class="text-center text-muted py-4">No records found.</td>
                    </tr>
                @endforelse
                </tbody>
            </table>
        </div>
    </div>

    <script>
        (function () {
            const selectAll = document.getElementById('selectAll');
            const checks = Array.from(document.querySelectorAll('.row-check'));
            const bulkBtn = document.getElementById('bulkDeleteBtn');
            const bulkIds = document.getElementById('bulkIds');
            const bulkForm = document.getElementById('bulkDeleteForm');

            function selectedIds() {
                return checks.filter(c => c.checked).map(c => c.value);
            }

            function syncState() {
                const ids = selectedIds();
                if (bulkBtn) bulkBtn.disabled = ids.length === 0;

                const allChecked = checks.length > 0 && ids.length === checks.length;
                if (selectAll) {
                    selectAll.checked = allChecked;
                    selectAll.indeterminate = ids.length > 0 && !allChecked;
                }
            }

            if (selectAll) {
                selectAll.addEventListener('change', function () {
                    checks.forEach(c => c.checked = selectAll.checked);
                    syncState();
                });
            }

            checks.forEach(c => c.addEventListener('change', syncState));

            if (bulkForm) {
                bulkForm.addEventListener('submit', function () {
                    bulkIds.value = selectedIds().join(',');
                });
            }

            syncState();
        })();
    </script>"##;
